mod app;
mod args;
mod commands;
mod core;
mod git;
mod link;
mod ui;
mod util;
mod views;

use anyhow::Result;
use crossterm::style::Stylize;

use crate::ui::interaction::UserCancelled;

fn main() -> Result<()> {
    if let Err(err) = app::run() {
        if err.downcast_ref::<UserCancelled>().is_some() {
            eprintln!("\n{}", "cancelled by user".red().bold());
            std::process::exit(130);
        }
        return Err(err);
    }
    Ok(())
}
