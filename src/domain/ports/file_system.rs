//! FileSystem port - abstraction over the file probes the planner needs
//!
//! The planner never reads entry sources; it only needs to know whether
//! they exist. Writing is used by `init` to create a config file.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MemoryFs` - in-memory set of files for tests
pub trait FileSystem {
    /// Check if anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a regular file (following symlinks)
    fn is_file(&self, path: &Path) -> bool;

    /// Write content to a file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }
}
