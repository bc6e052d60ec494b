use anyhow::{Result, anyhow};

pub const REMOTE_CONFIG_KEY: &str = "forgelink.remote";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteSource {
    Flag,
    GitConfig,
    Branch,
    Origin,
    Only,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteSelection {
    Chosen { name: String, source: RemoteSource },
    /// Several remotes and no preference; the caller decides (prompt or first).
    Ambiguous(Vec<String>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteHints<'a> {
    pub explicit: Option<&'a str>,
    pub configured: Option<&'a str>,
    pub branch_remote: Option<&'a str>,
}

pub fn select_remote(remotes: &[String], hints: RemoteHints<'_>) -> Result<RemoteSelection> {
    if remotes.is_empty() {
        return Err(anyhow!(
            "no git remotes configured; add one with `git remote add origin <url>`"
        ));
    }
    let known = |name: &str| remotes.iter().any(|r| r == name);

    if let Some(name) = hints.explicit {
        if !known(name) {
            return Err(anyhow!(
                "remote '{}' not found (known remotes: {})",
                name,
                remotes.join(", ")
            ));
        }
        return Ok(chosen(name, RemoteSource::Flag));
    }

    let preferred = [
        (hints.configured, RemoteSource::GitConfig),
        (hints.branch_remote, RemoteSource::Branch),
        (Some("origin"), RemoteSource::Origin),
    ];
    for (candidate, source) in preferred {
        if let Some(name) = candidate
            && known(name)
        {
            return Ok(chosen(name, source));
        }
    }

    if let [only] = remotes {
        return Ok(chosen(only, RemoteSource::Only));
    }
    Ok(RemoteSelection::Ambiguous(remotes.to_vec()))
}

fn chosen(name: &str, source: RemoteSource) -> RemoteSelection {
    RemoteSelection::Chosen {
        name: name.to_string(),
        source,
    }
}
