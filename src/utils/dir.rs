use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Changes the process working directory for the lifetime of the value.
///
/// The directory recorded at construction is restored when the guard drops,
/// on the normal path and during error propagation alike.
#[derive(Debug)]
pub struct ScopedDir {
    saved: PathBuf,
}

impl ScopedDir {
    /// Records the current directory and changes into `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or `target`
    /// cannot be entered.
    pub fn change<P: AsRef<Path>>(target: P) -> Result<Self> {
        let target = target.as_ref();
        let saved = env::current_dir()?;

        env::set_current_dir(target).map_err(|source| Error::Dir {
            path: target.to_path_buf(),
            source,
        })?;

        Ok(Self { saved })
    }
}

impl Drop for ScopedDir {
    fn drop(&mut self) {
        // Nothing sensible to report if the saved directory is gone.
        let _ = env::set_current_dir(&self.saved);
    }
}
