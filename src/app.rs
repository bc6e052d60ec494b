use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::link::{LinkAction, LinkRunOptions};
use crate::git::Git;

pub struct AppContext {
    cli: Cli,
    git: Git,
}

impl AppContext {
    fn build(cli: Cli) -> Result<Self> {
        let git = Git::discover()?;
        tracing::debug!(root = %git.root().display(), "discovered repository");
        Ok(Self { cli, git })
    }
}

pub fn run() -> Result<()> {
    // Dialoguer Ctrl-C workaround from console-rs/dialoguer#294.
    // We keep SIGINT handler no-op and recover cursor state on prompt errors.
    ctrlc::set_handler(|| {
        // Intentionally no-op: let dialoguer return an interrupted error.
    })
    .context("failed to install Ctrl-C handler")?;

    let cli = Cli::parse();
    init_tracing(cli.global.debug);

    if let Commands::Completions(args) = &cli.command {
        return commands::completions::run(args.shell);
    }

    let ctx = AppContext::build(cli)?;
    dispatch(&ctx)
}

fn init_tracing(debug: bool) {
    let filter = if debug && std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn dispatch(ctx: &AppContext) -> Result<()> {
    let global = &ctx.cli.global;
    let link_opts = |action| LinkRunOptions {
        action,
        porcelain: global.porcelain,
        yes: global.yes,
    };
    match &ctx.cli.command {
        Commands::Open(args) => {
            commands::link::run(&ctx.git, args, link_opts(LinkAction::Open))
        }
        Commands::Url(args) => commands::link::run(&ctx.git, args, link_opts(LinkAction::Print)),
        Commands::Remotes => commands::remotes::run(&ctx.git, global.porcelain),
        Commands::Completions(args) => commands::completions::run(args.shell),
    }
}
