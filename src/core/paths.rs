use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// Splits `src/lib.rs:42` into the path and the line number.
///
/// Only a trailing run of digits counts, and line `0` is rejected.
pub fn split_line_suffix(raw: &str) -> Option<(&str, u32)> {
    let (path, line) = raw.rsplit_once(':')?;
    if path.is_empty() || line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let line = line.parse::<u32>().ok().filter(|n| *n > 0)?;
    Some((path, line))
}

/// Resolves the file argument against the filesystem, peeling a `:LINE`
/// suffix when the literal path does not exist.
pub fn resolve_file_arg(raw: &str) -> Result<(PathBuf, Option<u32>)> {
    let literal = PathBuf::from(raw);
    if literal.exists() {
        return Ok((literal, None));
    }
    if let Some((path, line)) = split_line_suffix(raw) {
        let candidate = PathBuf::from(path);
        if candidate.exists() {
            return Ok((candidate, Some(line)));
        }
    }
    Err(anyhow!("file '{}' does not exist", raw))
}

/// Path of `file` relative to `root`, with `/` separators.
pub fn repo_relative_path(root: &Path, file: &Path) -> Result<String> {
    let root = root
        .canonicalize()
        .with_context(|| format!("failed to resolve repository root {}", root.display()))?;
    let file = file
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", file.display()))?;
    let relative = file.strip_prefix(&root).map_err(|_| {
        anyhow!(
            "'{}' is outside the repository at {}",
            file.display(),
            root.display()
        )
    })?;

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if segments.is_empty() {
        return Err(anyhow!(
            "'{}' is the repository root; pass a file inside it",
            file.display()
        ));
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn split_line_suffix_parses_trailing_number() {
        assert_eq!(split_line_suffix("src/lib.rs:42"), Some(("src/lib.rs", 42)));
    }

    #[test]
    fn split_line_suffix_rejects_zero_and_non_numeric() {
        assert_eq!(split_line_suffix("src/lib.rs:0"), None);
        assert_eq!(split_line_suffix("src/lib.rs:abc"), None);
        assert_eq!(split_line_suffix("src/lib.rs:"), None);
        assert_eq!(split_line_suffix(":12"), None);
        assert_eq!(split_line_suffix("src/lib.rs"), None);
    }

    #[test]
    fn resolve_file_arg_prefers_existing_literal_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let odd = dir.path().join("notes:7");
        fs::write(&odd, "x\n").expect("write file");
        let raw = odd.to_string_lossy().into_owned();
        let (path, line) = resolve_file_arg(&raw).expect("resolve");
        assert_eq!(path, odd);
        assert_eq!(line, None);
    }

    #[test]
    fn resolve_file_arg_peels_line_suffix() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("main.rs");
        fs::write(&file, "fn main() {}\n").expect("write file");
        let raw = format!("{}:3", file.display());
        let (path, line) = resolve_file_arg(&raw).expect("resolve");
        assert_eq!(path, file);
        assert_eq!(line, Some(3));
    }

    #[test]
    fn resolve_file_arg_reports_missing_file() {
        let err = resolve_file_arg("definitely/missing.rs:4").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn repo_relative_path_uses_forward_slashes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("src").join("cli");
        fs::create_dir_all(&nested).expect("mkdir");
        let file = nested.join("args.rs");
        fs::write(&file, "\n").expect("write file");
        let rel = repo_relative_path(dir.path(), &file).expect("relative path");
        assert_eq!(rel, "src/cli/args.rs");
    }

    #[test]
    fn repo_relative_path_rejects_outside_files() {
        let root = tempfile::tempdir().expect("root");
        let other = tempfile::tempdir().expect("other");
        let file = other.path().join("x.txt");
        fs::write(&file, "\n").expect("write file");
        let err = repo_relative_path(root.path(), &file).unwrap_err();
        assert!(err.to_string().contains("outside the repository"));
    }

    #[test]
    fn repo_relative_path_rejects_root_itself() {
        let root = tempfile::tempdir().expect("root");
        let err = repo_relative_path(root.path(), root.path()).unwrap_err();
        assert!(err.to_string().contains("repository root"));
    }
}
