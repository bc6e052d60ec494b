//! Remote URL normalization and forge blob links.
//!
//! Pure string transformations: a raw remote URL is normalized to a web
//! base, the base is classified into a forge dialect, and the dialect's
//! path grammar produces the final blob URL. Nothing here touches git,
//! the filesystem or the terminal.

mod blob;
mod forge;
mod remote;

pub use blob::build_blob_url;
pub use forge::{ForgeKind, classify_forge};
pub use remote::{RemoteError, normalize_remote};
