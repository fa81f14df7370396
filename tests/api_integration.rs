//! Integration tests against the live CoinGecko API.
//!
//! These exercise the full fetch → convert → apply pipeline against real
//! responses. All tests are `#[ignore]` because they require network access
//! (and the public API rate-limits aggressively).
//!
//! Run with:
//! ```bash
//! cargo test --test api_integration -- --ignored --test-threads 1
//! ```
//!
//! `COINBOARD_API_URL` (env or `.env`) points the tests at a mirror.

use coinboard::prelude::*;

fn test_client() -> CoinboardClient {
    dotenvy::dotenv().ok();
    let mut builder = CoinboardClient::builder();
    if let Ok(url) = std::env::var("COINBOARD_API_URL") {
        builder = builder.base_url(&url);
    }
    builder.build().expect("client should build")
}

#[tokio::test]
#[ignore]
async fn list_first_page_of_markets() {
    let client = test_client();
    let coins = client
        .markets()
        .list(Currency::Usd, Page::FIRST)
        .await
        .expect("market list should fetch");

    assert_eq!(coins.len(), PER_PAGE as usize);
    // Ranked by market cap, so the first page is never missing Bitcoin.
    assert!(coins.iter().any(|coin| coin.id.as_str() == "bitcoin"));
    for coin in &coins {
        assert!(coin.current_price > rust_decimal::Decimal::ZERO);
        assert!(!coin.image.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn fetch_bitcoin_detail() {
    let client = test_client();
    let detail = client
        .coins()
        .get(&CoinId::from("bitcoin"))
        .await
        .expect("detail should fetch");

    assert_eq!(detail.name, "Bitcoin");
    assert!(detail.price_in(Currency::Usd).is_some());
    assert!(detail.price_in(Currency::Eur).is_some());
    assert!(!detail.sparkline_7d.is_empty());
}

#[tokio::test]
#[ignore]
async fn fetch_day_chart_in_eur() {
    let client = test_client();
    let series = client
        .charts()
        .get(&CoinId::from("bitcoin"), Currency::Eur, ChartRange::Day)
        .await
        .expect("chart should fetch");

    assert!(!series.is_empty());
    let first = &series[0];
    assert!(first.timestamp().is_some());
    assert!(first.price > 0.0);
}

#[tokio::test]
#[ignore]
async fn unknown_coin_is_not_found() {
    let client = test_client();
    let err = client
        .coins()
        .get(&CoinId::from("definitely-not-a-real-coin-id"))
        .await
        .expect_err("bogus id should fail");

    assert!(matches!(
        err,
        SdkError::Http(HttpError::NotFound(_)) | SdkError::Http(HttpError::RateLimited { .. })
    ));
}

#[tokio::test]
#[ignore]
async fn store_reload_end_to_end() {
    let client = test_client();
    let mut store = MarketStore::new(MemoryWatchlistStorage::new());

    assert!(store.reload(&client).await);
    assert_eq!(store.coins().len(), PER_PAGE as usize);
    assert!(!store.loading());
    assert!(store.last_error().is_none());

    let request = store.set_currency(Currency::Eur);
    assert!(store.sync_list(&client, request).await);
    assert_eq!(store.currency(), Currency::Eur);
    assert_eq!(store.coins().len(), PER_PAGE as usize);
}
