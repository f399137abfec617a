//! Scoped working-directory changes.

use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Changes the process working directory until dropped.
///
/// The original directory is restored on every exit path, including
/// early returns through `?`.
#[derive(Debug)]
pub struct DirGuard {
    original: PathBuf,
}

impl DirGuard {
    /// Enters `path`, remembering the current directory.
    ///
    /// # Errors
    /// * `Error::IoError` if the current directory is unreadable or `path` cannot be entered
    pub fn enter<P: AsRef<Path>>(path: P) -> Result<Self> {
        let original = env::current_dir()?;
        env::set_current_dir(path.as_ref())?;
        debug!("Entered {}", path.as_ref().display());
        Ok(Self { original })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            warn!(
                "Failed to restore working directory {}: {}",
                self.original.display(),
                e
            );
        }
    }
}
