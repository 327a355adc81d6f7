//! Terminal cryptocurrency price dashboard.
//!
//! List view: live coin table with search, gainers/losers filter,
//! server-side sort modes and pagination. Detail view: market data,
//! description and a 1/7/30-day price chart, fetched from CoinGecko.

pub mod app;
pub mod config;
pub mod data;
pub mod detail;
pub mod i18n;
pub mod request;
pub mod store;
pub mod theme;
pub mod ui;
