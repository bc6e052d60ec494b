use crate::link::forge::ForgeKind;
use crate::util::url::{url_encode_component, url_encode_path};

/// Builds the web URL that renders `path` at `reference`.
///
/// `base` must already be normalized; it is used verbatim. The reference is
/// encoded as a single segment, so `feature/x` becomes `feature%2Fx`.
/// Unknown forges get the GitHub layout.
pub fn build_blob_url(
    forge: ForgeKind,
    base: &str,
    reference: &str,
    path: &str,
    line: Option<u32>,
) -> String {
    let blob_prefix = match forge {
        ForgeKind::GitLab => "-/blob",
        ForgeKind::GitHub | ForgeKind::Unknown => "blob",
    };
    let fragment = line.map(|n| format!("#L{n}")).unwrap_or_default();
    format!(
        "{base}/{blob_prefix}/{}/{}{fragment}",
        url_encode_component(reference),
        url_encode_path(path)
    )
}
