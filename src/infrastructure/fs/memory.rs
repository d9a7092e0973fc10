//! In-memory file system for tests and dry planning

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::file_system::{FileSystem, FsResult};

/// A fixed set of files and directories held in memory
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: BTreeSet<PathBuf>,
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with empty files at each path
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let fs = Self::new();
        for path in paths {
            fs.insert(path, "");
        }
        fs
    }

    /// Mark `path` as an existing directory
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: &str) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), content.to_string());
        }
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().ok()?.get(path).cloned()
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.is_file(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files
            .lock()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.insert(path, content);
        Ok(())
    }
}
