use serde::Serialize;

use crate::link::ForgeKind;

#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub remote: String,
    pub forge: ForgeKind,
    pub base: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub path: String,
    pub line: Option<u32>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoteView {
    pub name: String,
    pub url: Option<String>,
    pub base: Option<String>,
    pub forge: Option<ForgeKind>,
    pub error: Option<String>,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
