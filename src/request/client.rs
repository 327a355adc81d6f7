//! HTTP calls against the CoinGecko REST API.
//!
//! Every function returns a typed [`FetchResult`]; callers convert failures
//! into the single message string the UI renders. Bodies are fetched as text
//! and decoded explicitly so a malformed payload is distinguishable from a
//! transport failure.

use std::cmp::Ordering;
use std::time::Duration;

use itertools::Itertools;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::{FETCH_PER_PAGE, HTTP_TIMEOUT_SECS, VS_CURRENCY};
use crate::data::{Coin, CoinDetail, MarketChart};
use crate::detail::TimeRange;
use crate::request::api_path::{MARKETS_API, coin_detail_url, market_chart_url};
use crate::request::error::{FetchError, FetchResult};
use crate::store::SortBy;

pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> FetchResult<T> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(FetchError::status(status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}

/// Fetch up to [`FETCH_PER_PAGE`] coins ordered server-side by `sort_by`.
///
/// The API ignores `market_cap_asc` as an ordering parameter, so that one
/// mode is re-sorted here after receipt.
pub async fn fetch_markets(client: &Client, sort_by: SortBy) -> FetchResult<Vec<Coin>> {
    let url = format!(
        "{MARKETS_API}?vs_currency={VS_CURRENCY}&order={order}&per_page={FETCH_PER_PAGE}&page=1&sparkline=false",
        order = sort_by.order_param(),
    );
    log::debug!("fetching markets: {url}");
    let coins: Vec<Coin> = get_json(client, &url).await?;
    if sort_by == SortBy::MarketCapAsc {
        Ok(sort_ascending_by_market_cap(coins))
    } else {
        Ok(coins)
    }
}

pub fn sort_ascending_by_market_cap(coins: Vec<Coin>) -> Vec<Coin> {
    coins
        .into_iter()
        .sorted_by(|a, b| {
            a.market_cap
                .partial_cmp(&b.market_cap)
                .unwrap_or(Ordering::Equal)
        })
        .collect()
}

pub async fn fetch_coin_detail(client: &Client, id: &str) -> FetchResult<CoinDetail> {
    get_json(client, &coin_detail_url(id)).await
}

pub async fn fetch_market_chart(
    client: &Client,
    id: &str,
    range: TimeRange,
) -> FetchResult<MarketChart> {
    get_json(client, &market_chart_url(id, VS_CURRENCY, range.days())).await
}

/// All-or-nothing join of the detail and chart requests: both run
/// concurrently and either failure discards both results.
pub async fn fetch_coin_and_chart(
    client: &Client,
    id: &str,
    range: TimeRange,
) -> FetchResult<(CoinDetail, MarketChart)> {
    futures::try_join!(
        fetch_coin_detail(client, id),
        fetch_market_chart(client, id, range),
    )
}
