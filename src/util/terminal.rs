use std::io::{IsTerminal, stdout};

pub fn osc8_hyperlink(url: &str, label: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{label}\u{1b}]8;;\u{1b}\\")
}

pub fn supports_hyperlinks() -> bool {
    stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
