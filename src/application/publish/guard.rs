//! Checkout directory cleanup

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;

/// Removes the temporary checkout when dropped
///
/// Cleanup failures are logged, never raised; the run's own result wins.
pub struct CheckoutGuard<'a, FS: FileSystem> {
    file_system: &'a FS,
    path: Option<PathBuf>,
}

impl<'a, FS: FileSystem> CheckoutGuard<'a, FS> {
    pub fn new(file_system: &'a FS, path: &Path) -> Self {
        Self {
            file_system,
            path: Some(path.to_path_buf()),
        }
    }

    /// Give up ownership without removing the directory
    pub fn release(mut self) -> PathBuf {
        self.path.take().unwrap_or_default()
    }
}

impl<FS: FileSystem> Drop for CheckoutGuard<'_, FS> {
    fn drop(&mut self) {
        let Some(path) = self.path.take() else {
            return;
        };

        match self.file_system.remove_dir_all(&path) {
            Ok(()) => debug!("removed checkout {}", path.display()),
            Err(err) => warn!("could not remove checkout {}: {}", path.display(), err),
        }
    }
}
