pub mod paths;
pub mod remotes;

use anyhow::{Context, Result};

use crate::git::Git;
use crate::link::{ForgeKind, build_blob_url, classify_forge, normalize_remote};
use crate::views::{LinkView, RemoteView};

#[derive(Debug, Clone)]
pub struct LinkRequest<'a> {
    pub remote: &'a str,
    pub path: &'a str,
    pub line: Option<u32>,
    pub force_commit: bool,
}

/// Branch name when HEAD is on a branch, otherwise the short commit hash.
pub fn select_ref(git: &Git, force_commit: bool) -> Result<String> {
    if !force_commit {
        let branch = git.current_branch()?;
        if !branch.is_empty() {
            return Ok(branch);
        }
        tracing::debug!("HEAD is detached; linking to commit");
    }
    git.short_head_sha()
}

pub fn resolve_link(git: &Git, req: &LinkRequest<'_>) -> Result<LinkView> {
    let raw = git
        .remote_url(req.remote)?
        .with_context(|| format!("remote '{}' has no URL configured", req.remote))?;
    let base = normalize_remote(&raw)
        .with_context(|| format!("cannot derive a web URL from remote '{}'", req.remote))?;
    let forge = classify_forge(&base);
    let reference = select_ref(git, req.force_commit)?;
    let url = build_blob_url(forge, &base, &reference, req.path, req.line);
    tracing::debug!(remote = req.remote, %forge, %base, %reference, %url, "resolved blob link");

    Ok(LinkView {
        remote: req.remote.to_string(),
        forge,
        base,
        reference,
        path: req.path.to_string(),
        line: req.line,
        url,
    })
}

pub fn describe_remote(git: &Git, name: &str) -> Result<RemoteView> {
    let url = git.remote_url(name)?;
    let (base, forge, error) = match url.as_deref().map(normalize_remote) {
        Some(Ok(base)) => {
            let forge = classify_forge(&base);
            (Some(base), Some(forge), None)
        }
        Some(Err(err)) => (None, None, Some(err.to_string())),
        None => (None, None, Some("no URL configured".to_string())),
    };
    Ok(RemoteView {
        name: name.to_string(),
        url,
        base,
        forge,
        error,
    })
}

pub fn unknown_forge_warning(view: &LinkView) -> Option<String> {
    (view.forge == ForgeKind::Unknown).then(|| {
        format!(
            "warning: remote '{}' ({}) is not a recognized forge; assuming GitHub-style blob URLs",
            view.remote, view.base
        )
    })
}
