//! Static asset discovery
//!
//! Walks a directory of files that the build copies through the asset
//! template. Honors `.gitignore` and `.extplanignore` files. Hidden files
//! and directories (names starting with `.`) are skipped, which also keeps
//! the ignore files themselves out of the output.

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::PlanResult;

/// Per-directory ignore file read in addition to `.gitignore`
pub const IGNORE_FILE_NAME: &str = ".extplanignore";

/// List every file below `dir` in a stable, sorted order
pub fn discover_assets(dir: &Path) -> PlanResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("assets directory not found: {}", dir.display()),
        )
        .into());
    }

    let walker = WalkBuilder::new(dir)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .add_custom_ignore_filename(IGNORE_FILE_NAME)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered assets");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn discovers_nested_files_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        fs::write(dir.path().join("logo.png"), b"png").unwrap();
        fs::write(dir.path().join("icons/icon-16.png"), b"png").unwrap();
        fs::write(dir.path().join("app.css"), b"css").unwrap();

        let files = discover_assets(dir.path()).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            rel,
            vec![
                PathBuf::from("app.css"),
                PathBuf::from("icons").join("icon-16.png"),
                PathBuf::from("logo.png"),
            ]
        );
    }

    #[test]
    fn respects_extplanignore() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(IGNORE_FILE_NAME), "*.psd\n").unwrap();
        fs::write(dir.path().join("logo.png"), b"png").unwrap();
        fs::write(dir.path().join("logo.psd"), b"psd").unwrap();

        let files = discover_assets(dir.path()).unwrap();

        assert_eq!(files, vec![dir.path().join("logo.png")]);
    }

    #[test]
    fn hidden_files_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".nojekyll"), b"").unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache/icon.png"), b"png").unwrap();
        fs::write(dir.path().join("icon.png"), b"png").unwrap();

        let files = discover_assets(dir.path()).unwrap();

        assert_eq!(files, vec![dir.path().join("icon.png")]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(discover_assets(&dir.path().join("public")).is_err());
    }
}
