use anyhow::{Result, anyhow};
use clap::{CommandFactory, ValueEnum};
use clap_complete::Shell;

use crate::args::Cli;
use crate::ui::interaction::{is_interactive, select_index};

pub fn run(shell: Option<Shell>) -> Result<()> {
    let shell = if let Some(shell) = shell {
        shell
    } else if is_interactive() {
        prompt_for_shell()?
    } else {
        return Err(anyhow!(
            "shell required in non-interactive mode; pass forgelink completions <shell>"
        ));
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
    Ok(())
}

fn prompt_for_shell() -> Result<Shell> {
    let shells = Shell::value_variants();
    let labels: Vec<String> = shells.iter().map(Shell::to_string).collect();
    let default = shells.iter().position(|s| *s == Shell::Zsh).unwrap_or(0);
    let idx = select_index("Select shell for completion script", &labels, default)?;
    Ok(shells[idx])
}
