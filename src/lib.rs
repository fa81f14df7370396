//! # Coinboard
//!
//! Client-side dashboard core for the CoinGecko market API: a typed client,
//! an app-owned market state store, and a locally persisted watchlist.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, state containers, the
//!    market store, watchlist persistence (always available, WASM-safe)
//! 2. **HTTP API** — `CoinGeckoHttp` with one method per consumed endpoint
//! 3. **High-Level Client** — `CoinboardClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//!
//! let client = CoinboardClient::builder().build()?;
//! let mut store = MarketStore::new(FileWatchlistStorage::in_dir("~/.coinboard"));
//!
//! // Initial load, then react to the user switching currency.
//! store.reload(&client).await;
//! let request = store.set_currency(Currency::Eur);
//! store.sync_list(&client, request).await;
//!
//! store.toggle_watchlist(&CoinId::from("bitcoin"));
//! ```
//!
//! Issued requests can also be resolved manually (`client.markets().fetch`
//! + `store.apply_list`) when the app wants to drive fetches from its own
//! task or effect system; stale responses are discarded by fetch token
//! either way.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// The market state store — single source of truth for view consumers.
pub mod store;

/// Watchlist set + persistence backends.
pub mod watchlist;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and API paging configuration.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per consumed endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinboardClient` — the primary entry point for remote data.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ChartRange, CoinId, Currency, Page};

    // Domain types — market list
    pub use crate::domain::market::Coin;

    // Domain types — coin detail
    pub use crate::domain::coin::{CoinDetail, ImageSet};

    // Domain types — charts
    pub use crate::domain::chart::{ChartState, PricePoint};

    // Store
    pub use crate::store::{FetchToken, ListRequest, MarketStore};

    // Watchlist
    pub use crate::watchlist::{
        FileWatchlistStorage, MemoryWatchlistStorage, Watchlist, WatchlistStorage,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError, StorageError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, PER_PAGE, TOTAL_PAGES};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ChartsClient, CoinboardClient, CoinboardClientBuilder, CoinsClient, MarketsClient,
    };
}
