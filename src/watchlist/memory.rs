//! In-memory watchlist storage — test double and ephemeral-target fallback.

use crate::error::StorageError;
use crate::watchlist::{Watchlist, WatchlistStorage};
use std::sync::{Arc, Mutex};

/// Storage backend that keeps the "persisted" watchlist in memory.
///
/// Clones share the same backing cell, so a test can hand one clone to the
/// store and inspect what was written through the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryWatchlistStorage {
    inner: Arc<Mutex<Watchlist>>,
}

impl MemoryWatchlistStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with an existing watchlist.
    pub fn with(watchlist: Watchlist) -> Self {
        Self {
            inner: Arc::new(Mutex::new(watchlist)),
        }
    }

    /// The currently persisted value (what a reload would observe).
    pub fn persisted(&self) -> Watchlist {
        self.inner.lock().expect("watchlist cell poisoned").clone()
    }
}

impl WatchlistStorage for MemoryWatchlistStorage {
    fn load(&self) -> Result<Watchlist, StorageError> {
        Ok(self.persisted())
    }

    fn save(&self, watchlist: &Watchlist) -> Result<(), StorageError> {
        *self.inner.lock().expect("watchlist cell poisoned") = watchlist.clone();
        Ok(())
    }
}
