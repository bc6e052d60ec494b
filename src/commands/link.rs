use anyhow::{Result, anyhow};
use crossterm::style::Stylize;

use crate::args::LinkArgs;
use crate::core::paths::{repo_relative_path, resolve_file_arg};
use crate::core::remotes::{REMOTE_CONFIG_KEY, RemoteHints, RemoteSelection, select_remote};
use crate::core::{LinkRequest, describe_remote, resolve_link, unknown_forge_warning};
use crate::git::Git;
use crate::ui::interaction::is_interactive;
use crate::ui::pickers::pick_remote;
use crate::util::browser::open_url_in_browser;
use crate::util::terminal::{osc8_hyperlink, supports_hyperlinks};
use crate::views::print_json;

#[derive(Debug, Clone, Copy)]
pub enum LinkAction {
    Open,
    Print,
}

#[derive(Debug, Clone, Copy)]
pub struct LinkRunOptions {
    pub action: LinkAction,
    pub porcelain: bool,
    pub yes: bool,
}

pub fn run(git: &Git, args: &LinkArgs, opts: LinkRunOptions) -> Result<()> {
    let (file, suffix_line) = resolve_file_arg(&args.file)?;
    let path = repo_relative_path(git.root(), &file)?;
    let line = args.line.or(suffix_line);
    let remote = choose_remote(git, args, opts.yes)?;

    let view = resolve_link(
        git,
        &LinkRequest {
            remote: &remote,
            path: &path,
            line,
            force_commit: args.commit,
        },
    )?;

    if opts.porcelain {
        return print_json(&view);
    }

    if let Some(warning) = unknown_forge_warning(&view) {
        eprintln!("{}", warning.yellow());
    }

    match opts.action {
        LinkAction::Print => println!("{}", view.url),
        LinkAction::Open => match open_url_in_browser(&view.url) {
            Ok(()) => println!("opened {} in browser", view.url),
            Err(err) => {
                eprintln!("warning: could not auto-open URL ({err})");
                println!("{}", format_manual_link(&view.url, supports_hyperlinks()));
            }
        },
    }
    Ok(())
}

fn choose_remote(git: &Git, args: &LinkArgs, yes: bool) -> Result<String> {
    let remotes = git.remotes()?;
    if args.pick {
        if !is_interactive() {
            return Err(anyhow!(
                "remote picker requires an interactive terminal; pass --remote <name>"
            ));
        }
        return prompt_for_remote(git, &remotes);
    }

    let configured = git.config_get(REMOTE_CONFIG_KEY)?;
    let branch = git.current_branch()?;
    let branch_remote = git.remote_for_branch(&branch)?;
    let selection = select_remote(
        &remotes,
        RemoteHints {
            explicit: args.remote.as_deref(),
            configured: configured.as_deref(),
            branch_remote: branch_remote.as_deref(),
        },
    )?;

    match selection {
        RemoteSelection::Chosen { name, source } => {
            tracing::debug!(remote = %name, ?source, "selected remote");
            Ok(name)
        }
        RemoteSelection::Ambiguous(candidates) => {
            if !yes && is_interactive() {
                return prompt_for_remote(git, &candidates);
            }
            let first = candidates[0].clone();
            tracing::debug!(remote = %first, "several remotes; using the first");
            Ok(first)
        }
    }
}

fn prompt_for_remote(git: &Git, remotes: &[String]) -> Result<String> {
    if remotes.is_empty() {
        return Err(anyhow!("no git remotes configured"));
    }
    let views = remotes
        .iter()
        .map(|name| describe_remote(git, name))
        .collect::<Result<Vec<_>>>()?;
    pick_remote(&views)
}

fn format_manual_link(url: &str, use_clickable: bool) -> String {
    if use_clickable {
        return osc8_hyperlink(url, url).underlined().to_string();
    }
    format!("open manually: {url}")
}
