pub mod browser;
pub mod terminal;
pub mod url;
