use anyhow::Result;

use crate::core::describe_remote;
use crate::git::Git;
use crate::views::{RemoteView, print_json};

pub fn run(git: &Git, porcelain: bool) -> Result<()> {
    let views = git
        .remotes()?
        .iter()
        .map(|name| describe_remote(git, name))
        .collect::<Result<Vec<_>>>()?;

    if porcelain {
        return print_json(&serde_json::json!({ "remotes": views }));
    }

    if views.is_empty() {
        println!("remotes: none configured");
        return Ok(());
    }
    for view in &views {
        println!("{}", render_remote_line(view));
    }
    Ok(())
}

fn render_remote_line(view: &RemoteView) -> String {
    match (&view.base, &view.forge) {
        (Some(base), Some(forge)) => format!("{}\t{}\t{}", view.name, forge, base),
        _ => format!(
            "{}\t-\t{}",
            view.name,
            view.error.as_deref().unwrap_or("no web URL")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::ForgeKind;

    #[test]
    fn remote_line_shows_forge_and_base() {
        let view = RemoteView {
            name: "origin".to_string(),
            url: Some("git@gitlab.com:g/r.git".to_string()),
            base: Some("https://gitlab.com/g/r".to_string()),
            forge: Some(ForgeKind::GitLab),
            error: None,
        };
        assert_eq!(
            render_remote_line(&view),
            "origin\tgitlab\thttps://gitlab.com/g/r"
        );
    }

    #[test]
    fn remote_line_shows_normalization_error() {
        let view = RemoteView {
            name: "local".to_string(),
            url: Some("/srv/git/r.git".to_string()),
            base: None,
            forge: None,
            error: Some("unrecognized remote URL format: '/srv/git/r.git'".to_string()),
        };
        assert_eq!(
            render_remote_line(&view),
            "local\t-\tunrecognized remote URL format: '/srv/git/r.git'"
        );
    }
}
