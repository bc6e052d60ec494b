pub mod interaction;
pub mod pickers;
