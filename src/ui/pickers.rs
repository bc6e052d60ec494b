use anyhow::Result;

use crate::ui::interaction::select_index;
use crate::views::RemoteView;

pub fn build_remote_picker_items(remotes: &[RemoteView]) -> Vec<String> {
    let width = remotes.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    remotes
        .iter()
        .map(|remote| {
            let name = &remote.name;
            match (&remote.forge, &remote.base) {
                (Some(forge), Some(base)) => format!("◆ {name:<width$}  {base}  ({forge})"),
                _ => format!("○ {name:<width$}  (no web URL)"),
            }
        })
        .collect()
}

pub fn pick_remote(remotes: &[RemoteView]) -> Result<String> {
    let items = build_remote_picker_items(remotes);
    let default = remotes.iter().position(|r| r.base.is_some()).unwrap_or(0);
    let idx = select_index("Select remote to link against", &items, default)?;
    Ok(remotes[idx].name.clone())
}
