//! Persisted last-used directory
//!
//! The only state frameview remembers across runs is the directory of the
//! last successfully loaded video, used to seed the file-open dialog. The
//! on-disk format is a single line holding the directory path, newline
//! terminated. The file lives under the user configuration directory and is
//! rewritten on every successful load.

use crate::utils::error::{PlayerError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Store for the remembered last-used directory.
pub struct LastDirStore {
    path: PathBuf,
}

impl LastDirStore {
    /// Store backed by `<config_dir>/frameview/last_dir.txt`.
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| PlayerError::Config("no user config directory".to_string()))?;
        Ok(Self::at(base.join("frameview").join("last_dir.txt")))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the remembered directory, if any.
    ///
    /// A missing or empty file is not an error; it simply means no directory
    /// has been remembered yet.
    pub fn read(&self) -> Option<PathBuf> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let line = contents.lines().next()?.trim();
        if line.is_empty() {
            return None;
        }
        Some(PathBuf::from(line))
    }

    /// Remember `dir` as the last-used directory.
    pub fn store(&self, dir: &Path) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{}\n", dir.display()))?;
        debug!("remembered last-used directory {}", dir.display());
        Ok(())
    }

    /// Remember the parent directory of a successfully loaded video.
    pub fn store_parent_of(&self, video: &Path) {
        let Some(dir) = video.parent() else {
            return;
        };
        if let Err(e) = self.store(dir) {
            warn!("failed to persist last-used directory: {}", e);
        }
    }
}
