//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError, FsResult};

use super::home::ghpages_home_dir;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

fn ensure_parent(path: &Path) -> FsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
    }
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, content: &str, mode: u32) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    // `mode` only applies to newly created files
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str, _mode: u32) -> std::io::Result<()> {
    std::fs::write(path, content)
}

#[cfg(unix)]
fn restrict_dir(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn restrict_dir(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write_with_mode(&self, path: &Path, content: &str, mode: u32) -> FsResult<()> {
        ensure_parent(path)?;
        write_private(path, content, mode).map_err(|e| FsError::at(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn create_dir_with_mode(&self, path: &Path, mode: u32) -> FsResult<()> {
        self.create_dir_all(path)?;
        restrict_dir(path, mode).map_err(|e| FsError::at(path, e))
    }

    fn create_temp_dir(&self, prefix: &str) -> FsResult<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| FsError::at(&std::env::temp_dir(), e))?;
        // The run owns the directory from here on and removes it itself
        #[allow(deprecated)]
        let path = dir.into_path();
        Ok(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        match std::fs::remove_dir_all(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(FsError::at(path, e)),
            _ => Ok(()),
        }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        ghpages_home_dir()
    }

    fn current_dir(&self) -> FsResult<PathBuf> {
        std::env::current_dir().map_err(Into::into)
    }
}
