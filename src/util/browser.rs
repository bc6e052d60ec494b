use std::process::Command;

use anyhow::{Context, Result, anyhow};

pub const MOCK_BROWSER_ENV: &str = "FORGELINK_MOCK_BROWSER_OPEN";

pub fn open_url_in_browser(url: &str) -> Result<()> {
    if std::env::var(MOCK_BROWSER_ENV).ok().as_deref() == Some("1") {
        tracing::debug!(%url, "browser launch mocked");
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    let output = cmd
        .output()
        .with_context(|| format!("failed to launch browser opener for URL '{}'", url))?;
    if !output.status.success() {
        return Err(anyhow!(
            "browser opener exited non-zero: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}
