//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        // Opening catches files we can see but not read.
        path.is_file() && std::fs::File::open(path).is_ok()
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| FsError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_creates_parents() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested/dir/extplan.toml");
        let fs = LocalFs::new();

        fs.write(&file, "[build]\n").unwrap();

        assert!(fs.is_file(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "[build]\n");
    }

    #[test]
    fn local_fs_write_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("extplan.toml");
        let fs = LocalFs::new();

        fs.write(&file, "old").unwrap();
        fs.write(&file, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn directories_exist_but_are_not_files() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        assert!(fs.exists(dir.path()));
        assert!(!fs.is_file(dir.path()));
        assert!(!fs.exists(&dir.path().join("missing.ts")));
    }
}
