use crate::errors::Result;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The fixed allowlist of file extensions eligible for processing, in the
/// order the extension groups are emitted.
pub const EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Enumerates candidate files directly in `dir` (non-recursive).
///
/// Only regular files whose extension appears in `extensions` are returned,
/// grouped by extension in allowlist order; within one extension the order is
/// the walker's enumeration order (not sorted). A file whose name equals
/// `skip_name` is always excluded, which guards the running executable
/// against self-modification. Zero matches is not an error.
pub fn discover(
    dir: &Path,
    extensions: &[&str],
    skip_name: Option<&OsStr>,
) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let mut walker = WalkBuilder::new(dir);
    walker.max_depth(Some(1));
    // Glob-equivalent filtering: every matching file is enumerated even when
    // gitignored; only dotfiles are skipped, since `*.ts` never matches
    // `.foo.ts`.
    walker.standard_filters(false);
    walker.hidden(true);

    for entry in walker.build() {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if skip_name.is_some() && path.file_name() == skip_name {
            continue;
        }
        entries.push(path.to_path_buf());
    }

    // Group by extension so the allowlist order is stable across platforms.
    let mut candidates = Vec::new();
    for ext in extensions {
        for path in &entries {
            if has_extension(path, ext) {
                candidates.push(path.clone());
            }
        }
    }

    Ok(candidates)
}

/// Case-insensitive extension check.
fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|s| s.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extension_allowlist() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.ts", "b.jsx", "c.md", "d.py", "e.rs"] {
            fs::write(temp_dir.path().join(name), "content").unwrap();
        }

        let found = discover(temp_dir.path(), EXTENSIONS, None).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.ts", "b.jsx"]);
    }

    #[test]
    fn test_non_recursive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("top.ts"), "content").unwrap();
        let sub = temp_dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("nested.ts"), "content").unwrap();

        let found = discover(temp_dir.path(), EXTENSIONS, None).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "top.ts");
    }

    #[test]
    fn test_skip_name_excluded() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("keep.ts"), "content").unwrap();
        fs::write(temp_dir.path().join("self.ts"), "content").unwrap();

        let found = discover(
            temp_dir.path(),
            EXTENSIONS,
            Some(OsStr::new("self.ts")),
        )
        .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "keep.ts");
    }

    #[test]
    fn test_allowlist_order_groups_extensions() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.js"), "content").unwrap();
        fs::write(temp_dir.path().join("b.ts"), "content").unwrap();

        let found = discover(temp_dir.path(), EXTENSIONS, None).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        // .ts comes before .js regardless of directory order
        assert_eq!(names, vec!["b.ts", "a.js"]);
    }

    #[test]
    fn test_gitignored_candidate_is_still_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(temp_dir.path().join(".gitignore"), "generated.ts\n").unwrap();
        fs::write(temp_dir.path().join("generated.ts"), "content").unwrap();
        fs::write(temp_dir.path().join("normal.ts"), "content").unwrap();

        let found = discover(temp_dir.path(), EXTENSIONS, None).unwrap();
        let mut names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        names.sort();

        // Ignore rules do not apply to candidate enumeration
        assert_eq!(names, vec!["generated.ts", "normal.ts"]);
    }

    #[test]
    fn test_dotfiles_not_matched() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".hidden.ts"), "content").unwrap();
        fs::write(temp_dir.path().join("visible.ts"), "content").unwrap();

        let found = discover(temp_dir.path(), EXTENSIONS, None).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "visible.ts");
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let found = discover(temp_dir.path(), EXTENSIONS, None).unwrap();
        assert!(found.is_empty());
    }
}
