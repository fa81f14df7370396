//! Watchlist — the user-curated set of tracked coins, persisted locally.

pub mod file;
pub mod memory;

pub use file::FileWatchlistStorage;
pub use memory::MemoryWatchlistStorage;

use crate::error::StorageError;
use crate::shared::CoinId;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Watchlist ───────────────────────────────────────────────────────────────

/// Insertion-ordered set of watched coin ids.
///
/// Membership only; insertion order is kept so renders stay stable across
/// toggles. Serializes as a JSON array of id strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    ids: Vec<CoinId>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from raw ids, dropping duplicates while keeping first-seen order.
    pub fn from_ids(ids: impl IntoIterator<Item = CoinId>) -> Self {
        let mut watchlist = Self::new();
        for id in ids {
            if !watchlist.contains(&id) {
                watchlist.ids.push(id);
            }
        }
        watchlist
    }

    pub fn contains(&self, id: &CoinId) -> bool {
        self.ids.contains(id)
    }

    /// Toggles membership: removes if present, appends if absent.
    /// Returns `true` when the id is present afterwards.
    pub fn toggle(&mut self, id: &CoinId) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn ids(&self) -> &[CoinId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoinId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Serialize for Watchlist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.ids.len()))?;
        for id in &self.ids {
            seq.serialize_element(id)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Watchlist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdsVisitor;

        impl<'de> Visitor<'de> for IdsVisitor {
            type Value = Watchlist;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an array of coin id strings")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut ids = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(id) = seq.next_element::<CoinId>()? {
                    ids.push(id);
                }
                // Persisted data may predate the set invariant.
                Ok(Watchlist::from_ids(ids))
            }
        }

        deserializer.deserialize_seq(IdsVisitor)
    }
}

// ─── Storage interface ───────────────────────────────────────────────────────

/// Narrow persistence interface so the storage backend can be swapped out
/// and faked in tests.
pub trait WatchlistStorage: Send + Sync {
    fn load(&self) -> Result<Watchlist, StorageError>;
    fn save(&self, watchlist: &Watchlist) -> Result<(), StorageError>;
}
