use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForgeKind {
    GitLab,
    GitHub,
    Unknown,
}

impl ForgeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ForgeKind::GitLab => "gitlab",
            ForgeKind::GitHub => "github",
            ForgeKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ForgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies a normalized base URL by its host name.
///
/// Self-hosted instances are recognized as long as the host carries the
/// forge's brand (`gitlab.corp.io`, `github.acme.com`). Anything that does not
/// parse as a URL with a host is `Unknown`.
pub fn classify_forge(base: &str) -> ForgeKind {
    let Some(host) = Url::parse(base)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
    else {
        return ForgeKind::Unknown;
    };

    if host.contains("gitlab") {
        ForgeKind::GitLab
    } else if host.contains("github") {
        ForgeKind::GitHub
    } else {
        ForgeKind::Unknown
    }
}
