//! HTTP client layer — `CoinGeckoHttp`, one method per consumed endpoint.

pub mod client;

pub use client::CoinGeckoHttp;
