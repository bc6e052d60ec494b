pub fn url_encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

/// Encodes each `/`-separated segment on its own so directory structure survives.
pub fn url_encode_path(path: &str) -> String {
    path.split('/')
        .map(url_encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

pub fn strip_git_suffix(value: &str) -> &str {
    value.strip_suffix(".git").unwrap_or(value)
}
