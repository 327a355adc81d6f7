pub mod api_path;
pub mod client;
pub mod error;

pub use client::{fetch_coin_and_chart, fetch_markets};
pub use error::{FetchError, FetchResult};
