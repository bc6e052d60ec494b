pub mod completions;
pub mod link;
pub mod remotes;
