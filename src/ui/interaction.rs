use std::io::{IsTerminal, stdin, stdout};

use anyhow::Result;
use dialoguer::console::Term;
use dialoguer::{Select, theme::ColorfulTheme};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("cancelled by user")]
pub struct UserCancelled;

pub fn prompt_or_cancel<T>(result: dialoguer::Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            let _ = Term::stdout().show_cursor();
            let _ = Term::stderr().show_cursor();
            match err {
                dialoguer::Error::IO(io_err)
                    if io_err.kind() == std::io::ErrorKind::Interrupted =>
                {
                    Err(UserCancelled.into())
                }
                other => Err(other.into()),
            }
        }
    }
}

pub fn is_interactive() -> bool {
    stdout().is_terminal() && stdin().is_terminal()
}

pub fn select_index(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    let theme = ColorfulTheme::default();
    prompt_or_cancel(
        Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact(),
    )
}
