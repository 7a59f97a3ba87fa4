//! Advisory lock serializing writers of the entry document.

use crate::errors::{AppResult, LockError};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Exclusive lock held for a read-modify-write of the entry document.
///
/// The lock is released when the guard is dropped.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Takes the lock at `path` without waiting.
    ///
    /// # Errors
    ///
    /// - `LockError::FileBusy` if another process holds the lock
    /// - `LockError::AcquisitionFailed` if the lock file cannot be opened or locked
    pub fn acquire(path: &Path) -> AppResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.to_path_buf(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!("Acquired store lock {:?}", path);
                Ok(StoreLock {
                    file,
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(LockError::FileBusy {
                    path: path.to_path_buf(),
                }
                .into())
            }
            Err(source) => Err(LockError::AcquisitionFailed {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release store lock {:?}: {}", self.path, e);
        } else {
            debug!("Released store lock {:?}", self.path);
        }
    }
}
