use thiserror::Error;

use crate::util::url::strip_git_suffix;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("unrecognized remote URL format: '{0}'")]
    UnrecognizedRemoteFormat(String),
}

/// Turns a git remote URL into the HTTPS base of the repository's web UI.
///
/// Accepted forms, first match wins:
/// - `http(s)://host/path[.git]`, kept as-is apart from the `.git` suffix
/// - `user@host:path[.git]` (scp-like)
/// - `ssh://[user@]host[:port]/path[.git]`, the SSH port is dropped
pub fn normalize_remote(raw: &str) -> Result<String, RemoteError> {
    let trimmed = raw.trim();

    if has_scheme(trimmed, "http://") || has_scheme(trimmed, "https://") {
        return Ok(strip_git_suffix(trimmed.trim_end_matches('/'))
            .trim_end_matches('/')
            .to_string());
    }

    if let Some(base) = parse_scp_like(trimmed) {
        return Ok(base);
    }

    if let Some(base) = parse_ssh_scheme(trimmed) {
        return Ok(base);
    }

    Err(RemoteError::UnrecognizedRemoteFormat(raw.to_string()))
}

fn has_scheme(value: &str, scheme: &str) -> bool {
    value
        .get(..scheme.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
}

/// The user part may itself contain `@` (`john@corp.com@host:path`) but
/// never `:` or `/`, so the separator is the last `@` before either.
fn parse_scp_like(raw: &str) -> Option<String> {
    let head_end = raw.find([':', '/']).unwrap_or(raw.len());
    let at = raw[..head_end].rfind('@')?;
    let (user, rest) = (&raw[..at], &raw[at + 1..]);
    if user.is_empty() {
        return None;
    }
    let (host, path) = rest.split_once(':')?;
    if host.is_empty() || host.contains('/') {
        return None;
    }
    web_base(host, path)
}

fn parse_ssh_scheme(raw: &str) -> Option<String> {
    if !has_scheme(raw, "ssh://") {
        return None;
    }
    let rest = &raw["ssh://".len()..];
    let (authority, path) = rest.split_once('/')?;
    let host_port = match authority.rsplit_once('@') {
        Some((user, host_port)) if !user.is_empty() => host_port,
        Some(_) => return None,
        None => authority,
    };
    web_base(split_host_port(host_port)?, path)
}

/// Drops an optional numeric `:port`, keeping bracketed IPv6 hosts whole.
fn split_host_port(host_port: &str) -> Option<&str> {
    let (host, port) = if host_port.starts_with('[') {
        let close = host_port.find(']')?;
        let (host, rest) = host_port.split_at(close + 1);
        match rest {
            "" => (host, None),
            _ => (host, Some(rest.strip_prefix(':')?)),
        }
    } else {
        match host_port.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };
    if host.is_empty() || host == "[]" {
        return None;
    }
    if let Some(port) = port
        && !port.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some(host)
}

fn web_base(host: &str, path: &str) -> Option<String> {
    let path = strip_git_suffix(path.trim_matches('/')).trim_end_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(format!("https://{host}/{path}"))
}
