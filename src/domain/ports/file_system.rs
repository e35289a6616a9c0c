//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the resolver, the credential writer and the pipeline to
//! touch the disk without depending on concrete implementations (local,
//! in-memory).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Convert an I/O error, keeping the path it happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
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
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, creating parent directories, and restrict it
    /// to the given permission bits
    ///
    /// Used for secrets (netrc, ssh key). Mode bits are ignored on platforms
    /// without unix permissions.
    fn write_with_mode(&self, path: &Path, content: &str, mode: u32) -> FsResult<()>;

    /// Check if file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents, restricting the leaf to `mode`
    fn create_dir_with_mode(&self, path: &Path, mode: u32) -> FsResult<()>;

    /// Create a fresh, uniquely named directory under the system temp dir
    ///
    /// The caller owns the directory and is responsible for removing it.
    fn create_temp_dir(&self, prefix: &str) -> FsResult<PathBuf>;

    /// Remove a directory tree; a missing directory is not an error
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Home directory used for credential files
    fn home_dir(&self) -> Option<PathBuf>;

    /// Current working directory
    fn current_dir(&self) -> FsResult<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write_with_mode(&self, path: &Path, content: &str, mode: u32) -> FsResult<()> {
        (**self).write_with_mode(path, content, mode)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn create_dir_with_mode(&self, path: &Path, mode: u32) -> FsResult<()> {
        (**self).create_dir_with_mode(path, mode)
    }

    fn create_temp_dir(&self, prefix: &str) -> FsResult<PathBuf> {
        (**self).create_temp_dir(prefix)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir_all(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }

    fn current_dir(&self) -> FsResult<PathBuf> {
        (**self).current_dir()
    }
}
