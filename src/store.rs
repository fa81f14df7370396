//! Market State Store — the shared state container behind every view.
//!
//! The app constructs exactly one `MarketStore` at startup (e.g. inside a
//! Dioxus `Signal` or an Elm-style model) and passes it by reference down
//! the rendering tree. The store mediates the remote market feed, the
//! persisted watchlist, and the per-coin detail cache; views read through
//! the accessors and mutate only through the operations below, so every
//! consumer observes one consistent snapshot. Single-writer: all mutation
//! goes through `&mut self`, no locks involved.
//!
//! List fetches follow an issue/apply protocol. A setter records the new
//! (currency, page) pair and hands back a [`ListRequest`] carrying a fetch
//! token; the app performs the fetch between borrows of the store and feeds
//! the result to [`MarketStore::apply_list`]. Only the most recently issued
//! token may apply — a slow, stale response is discarded instead of
//! overwriting fresher state.

use crate::domain::coin::CoinDetail;
use crate::domain::market::Coin;
use crate::error::SdkError;
use crate::shared::{CoinId, Currency, Page};
use crate::watchlist::{Watchlist, WatchlistStorage};
use std::collections::HashMap;
use tracing::warn;

#[cfg(feature = "http")]
use crate::client::CoinboardClient;

// ─── Fetch protocol ──────────────────────────────────────────────────────────

/// Token identifying one issued list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Descriptor of a list fetch the app should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    pub token: FetchToken,
    pub currency: Currency,
    pub page: Page,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Single source of truth for remote market data and local user preferences.
pub struct MarketStore {
    coins: Vec<Coin>,
    loading: bool,
    last_error: Option<SdkError>,
    currency: Currency,
    page: Page,
    watchlist: Watchlist,
    details: HashMap<CoinId, CoinDetail>,
    storage: Box<dyn WatchlistStorage>,
    issued: u64,
}

impl MarketStore {
    /// Build the store, rehydrating the watchlist from `storage`.
    ///
    /// A failing backend degrades to an empty watchlist — persistence
    /// problems must never block startup. The first list fetch is issued by
    /// the app calling [`MarketStore::refresh`].
    pub fn new(storage: impl WatchlistStorage + 'static) -> Self {
        let watchlist = storage.load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load watchlist, starting empty");
            Watchlist::new()
        });

        Self {
            coins: Vec::new(),
            loading: false,
            last_error: None,
            currency: Currency::default(),
            page: Page::FIRST,
            watchlist,
            details: HashMap::new(),
            storage: Box::new(storage),
            issued: 0,
        }
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Issue a fresh list fetch for the current (currency, page) pair.
    pub fn refresh(&mut self) -> ListRequest {
        self.issue()
    }

    /// Switch the display currency and issue the refresh it requires.
    pub fn set_currency(&mut self, currency: Currency) -> ListRequest {
        self.currency = currency;
        self.issue()
    }

    /// Move the page cursor and issue the refresh it requires.
    pub fn set_page(&mut self, page: Page) -> ListRequest {
        self.page = page;
        self.issue()
    }

    /// Resolve a list fetch.
    ///
    /// Returns `false` and leaves all state untouched when `token` is not
    /// the most recently issued one — the newer in-flight request owns the
    /// loading flag and the list. For the current token: on success the
    /// coin list is replaced wholesale and any stored error cleared; on
    /// failure the previous list is retained and the error recorded. No
    /// automatic retry either way.
    pub fn apply_list(&mut self, token: FetchToken, result: Result<Vec<Coin>, SdkError>) -> bool {
        if token.0 != self.issued {
            return false;
        }

        self.loading = false;
        match result {
            Ok(coins) => {
                self.coins = coins;
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e);
            }
        }
        true
    }

    /// Toggle one coin in the watchlist and write the set through to
    /// storage.
    ///
    /// Always succeeds from the caller's perspective: a failed write is
    /// logged and in-memory state stands, the next successful save
    /// re-syncs the backend.
    pub fn toggle_watchlist(&mut self, id: &CoinId) {
        self.watchlist.toggle(id);
        if let Err(e) = self.storage.save(&self.watchlist) {
            warn!(coin = %id, error = %e, "failed to persist watchlist");
        }
    }

    /// Cache detail for one coin, overwriting any prior entry for that id.
    /// Other entries are untouched; nothing is ever evicted.
    pub fn apply_detail(&mut self, detail: CoinDetail) {
        self.details.insert(detail.id.clone(), detail);
    }

    fn issue(&mut self) -> ListRequest {
        self.issued += 1;
        self.loading = true;
        ListRequest {
            token: FetchToken(self.issued),
            currency: self.currency,
            page: self.page,
        }
    }

    // ── Async conveniences ───────────────────────────────────────────────

    /// Fetch and apply one issued request. Returns whether the result was
    /// applied (it is not when a newer request was issued meanwhile).
    #[cfg(feature = "http")]
    pub async fn sync_list(&mut self, client: &CoinboardClient, request: ListRequest) -> bool {
        let result = client.markets().fetch(&request).await;
        self.apply_list(request.token, result)
    }

    /// Refresh the current (currency, page) pair end to end.
    #[cfg(feature = "http")]
    pub async fn reload(&mut self, client: &CoinboardClient) -> bool {
        let request = self.refresh();
        self.sync_list(client, request).await
    }

    /// Fetch and cache detail for one coin.
    ///
    /// Failures are logged and swallowed; the cache entry stays unset or
    /// stale and no error state is surfaced.
    #[cfg(feature = "http")]
    pub async fn fetch_detail(&mut self, client: &CoinboardClient, id: &CoinId) {
        match client.coins().get(id).await {
            Ok(detail) => self.apply_detail(detail),
            Err(e) => warn!(coin = %id, error = %e, "coin detail fetch failed"),
        }
    }

    // ── Read accessors ───────────────────────────────────────────────────

    /// Coin list from the most recently applied fetch.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Whether a list fetch is in flight. Governs UI only — the coin list
    /// stays valid while loading.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Error recorded by the most recently applied fetch, if it failed.
    pub fn last_error(&self) -> Option<&SdkError> {
        self.last_error.as_ref()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn detail(&self, id: &CoinId) -> Option<&CoinDetail> {
        self.details.get(id)
    }

    pub fn details(&self) -> &HashMap<CoinId, CoinDetail> {
        &self.details
    }
}
