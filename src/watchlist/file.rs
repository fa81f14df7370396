//! File-backed watchlist storage.

use crate::error::StorageError;
use crate::watchlist::{Watchlist, WatchlistStorage};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default file name of the persisted watchlist.
pub const WATCHLIST_FILE: &str = "watchlist.json";

/// JSON-file watchlist storage.
///
/// `load` is lenient: a missing file or malformed content yields an empty
/// watchlist, so a corrupt entry can never break startup.
#[derive(Debug, Clone)]
pub struct FileWatchlistStorage {
    path: PathBuf,
}

impl FileWatchlistStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the default file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(WATCHLIST_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WatchlistStorage for FileWatchlistStorage {
    fn load(&self) -> Result<Watchlist, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Watchlist::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(watchlist) => Ok(watchlist),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "malformed watchlist file, starting empty"
                );
                Ok(Watchlist::new())
            }
        }
    }

    fn save(&self, watchlist: &Watchlist) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(watchlist)?)?;
        Ok(())
    }
}
