use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "forgelink",
    version,
    about = "Link files in a git checkout to their page on GitHub or GitLab"
)]
pub struct Cli {
    #[command(flatten, next_help_heading = "Global Options")]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'P',
        long,
        global = true,
        help = "Output machine-readable JSON"
    )]
    pub porcelain: bool,
    #[arg(
        short = 'y',
        long,
        global = true,
        help = "Skip interactive prompts and take the default choice"
    )]
    pub yes: bool,
    #[arg(
        long,
        global = true,
        help = "Enable debug logging (when RUST_LOG is not set)"
    )]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the file's forge page in a browser
    Open(LinkArgs),
    /// Print the file's forge URL
    Url(LinkArgs),
    /// List remotes and the forge each one maps to
    Remotes,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct LinkArgs {
    #[arg(help = "File to link (accepts a path:LINE suffix)")]
    pub file: String,
    #[arg(
        short = 'l',
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "1-based line to highlight"
    )]
    pub line: Option<u32>,
    #[arg(short = 'r', long, help = "Remote to link against", conflicts_with = "pick")]
    pub remote: Option<String>,
    #[arg(
        short = 'c',
        long,
        help = "Link to the current commit instead of the branch"
    )]
    pub commit: bool,
    #[arg(short = 'p', long, help = "Choose the remote interactively")]
    pub pick: bool,
}

#[derive(Debug, Args)]
#[command(
    after_help = "Installation examples:\n  zsh:        forgelink completions zsh > ~/.zsh/completions/_forgelink\n  bash:       forgelink completions bash > ~/.local/share/bash-completion/completions/forgelink\n  fish:       forgelink completions fish > ~/.config/fish/completions/forgelink.fish\n  powershell: forgelink completions powershell > forgelink.ps1"
)]
pub struct CompletionsArgs {
    #[arg(help = "Shell to generate completions for")]
    pub shell: Option<clap_complete::Shell>,
}
