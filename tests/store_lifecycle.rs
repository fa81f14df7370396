//! Integration tests for the store + persistence lifecycle.
//!
//! No network involved: list fetches are resolved with fixture data through
//! the issue/apply protocol, and persistence goes through the real file
//! backend in a temp directory.

use std::collections::HashMap;
use std::path::PathBuf;

use coinboard::prelude::*;
use rust_decimal::Decimal;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("coinboard-it-{}-{}", std::process::id(), name))
}

fn coin(id: &str, price: i64) -> Coin {
    Coin {
        id: CoinId::from(id),
        symbol: id.to_string(),
        name: id.to_string(),
        image: format!("https://example.com/{}.png", id),
        current_price: Decimal::from(price),
        change_24h_pct: None,
        market_cap: Decimal::from(price * 1_000_000),
        market_cap_rank: None,
        total_volume: None,
        last_updated: None,
    }
}

#[test]
fn watchlist_survives_restart() {
    let dir = temp_dir("restart");

    {
        let mut store = MarketStore::new(FileWatchlistStorage::in_dir(&dir));
        store.toggle_watchlist(&CoinId::from("bitcoin"));
        store.toggle_watchlist(&CoinId::from("solana"));
        store.toggle_watchlist(&CoinId::from("dogecoin"));
        store.toggle_watchlist(&CoinId::from("dogecoin"));
    }

    // A fresh store (new process, same storage) sees the persisted set.
    let store = MarketStore::new(FileWatchlistStorage::in_dir(&dir));
    assert_eq!(
        store.watchlist().ids(),
        &[CoinId::from("bitcoin"), CoinId::from("solana")]
    );
}

#[test]
fn corrupt_watchlist_file_starts_empty() {
    let dir = temp_dir("corrupt");
    let storage = FileWatchlistStorage::in_dir(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(storage.path(), "][ not json").unwrap();

    let store = MarketStore::new(storage);
    assert!(store.watchlist().is_empty());
}

#[test]
fn currency_switch_with_out_of_order_resolution() {
    let mut store = MarketStore::new(MemoryWatchlistStorage::new());

    // Initial load in USD.
    let request = store.refresh();
    assert!(store.apply_list(request.token, Ok(vec![coin("bitcoin", 69702)])));

    // User flips to EUR, then RUB, before the EUR fetch resolves.
    let eur = store.set_currency(Currency::Eur);
    let rub = store.set_currency(Currency::Rub);
    assert_eq!(store.currency(), Currency::Rub);

    assert!(store.apply_list(rub.token, Ok(vec![coin("bitcoin-rub", 6_400_000)])));
    assert!(!store.apply_list(eur.token, Ok(vec![coin("bitcoin-eur", 64_000)])));

    assert_eq!(store.coins()[0].id.as_str(), "bitcoin-rub");
    assert!(!store.loading());
    assert!(store.last_error().is_none());
}

#[test]
fn detail_cache_feeds_chart_state_flow() {
    let mut store = MarketStore::new(MemoryWatchlistStorage::new());
    let mut charts = ChartState::new();
    let id = CoinId::from("bitcoin");

    let mut current_price = HashMap::new();
    current_price.insert("usd".to_string(), Decimal::from(69702));
    store.apply_detail(CoinDetail {
        id: id.clone(),
        symbol: "btc".to_string(),
        name: "Bitcoin".to_string(),
        image: ImageSet::default(),
        description: "Bitcoin is the first cryptocurrency. More text.".to_string(),
        market_cap_rank: Some(1),
        current_price,
        market_cap: HashMap::new(),
        change_24h_pct: None,
        sparkline_7d: vec![68123.1, 69702.3],
        genesis_date: None,
        last_updated: None,
    });

    charts.apply_snapshot(
        id.clone(),
        ChartRange::Day,
        vec![
            PricePoint {
                time: 1_711_843_200_000,
                price: 69702.3,
            },
            PricePoint {
                time: 1_711_846_800_000,
                price: 69845.9,
            },
        ],
    );

    let detail = store.detail(&id).unwrap();
    assert_eq!(detail.price_in(store.currency()), Some(Decimal::from(69702)));
    assert_eq!(detail.summary(), "Bitcoin is the first cryptocurrency.");
    assert_eq!(charts.get(&id, ChartRange::Day).unwrap().len(), 2);
    assert_eq!(charts.get(&id, ChartRange::Year), None);
}
