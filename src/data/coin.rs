//! Serde models for the CoinGecko market endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// One market snapshot row from `/coins/markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub market_cap: f64,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_24h: f64,
}

/// Full record from `/coins/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: CoinImage,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub links: CoinLinks,
    pub market_data: MarketData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinImage {
    #[serde(default)]
    pub large: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub en: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinLinks {
    #[serde(default)]
    pub homepage: Vec<String>,
}

/// Currency-scoped market figures under `market_data`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_24h: f64,
}

impl MarketData {
    pub fn price_in(&self, currency: &str) -> f64 {
        self.current_price.get(currency).copied().unwrap_or(0.0)
    }

    pub fn market_cap_in(&self, currency: &str) -> f64 {
        self.market_cap.get(currency).copied().unwrap_or(0.0)
    }
}

impl CoinDetail {
    /// First usable homepage URL, if any.
    pub fn homepage(&self) -> Option<&str> {
        self.links
            .homepage
            .iter()
            .map(String::as_str)
            .find(|url| !url.is_empty())
    }

    /// Description with HTML markup stripped for terminal rendering.
    pub fn description_text(&self) -> String {
        strip_html(&self.description.en)
    }
}

/// Response from `/coins/{id}/market_chart`: `prices` is a sequence of
/// `[timestamp_ms, price]` pairs, ascending by timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<(i64, f64)>,
}

/// The API reports some numeric fields as `null` for thinly traded coins.
fn null_to_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(0.0))
}

fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_tolerates_null_change() {
        let json = r#"{
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "btc",
            "image": "https://example.com/btc.png",
            "current_price": 5000000.0,
            "market_cap": 98000000000.0,
            "price_change_percentage_24h": null
        }"#;
        let coin: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.price_change_percentage_24h, 0.0);
    }

    #[test]
    fn market_chart_parses_pairs() {
        let json = r#"{ "prices": [[1700000000000, 1.5], [1700003600000, 1.75]] }"#;
        let chart: MarketChart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0], (1_700_000_000_000, 1.5));
    }

    #[test]
    fn detail_reads_currency_scoped_values() {
        let json = r#"{
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "btc",
            "image": { "large": "https://example.com/btc-large.png" },
            "description": { "en": "<b>Bitcoin</b> is a <a href=\"x\">peer-to-peer</a> currency." },
            "links": { "homepage": ["", "https://bitcoin.org"] },
            "market_data": {
                "current_price": { "inr": 5000000.0, "usd": 60000.0 },
                "market_cap": { "inr": 98000000000.0 },
                "price_change_percentage_24h": -2.25
            }
        }"#;
        let detail: CoinDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.market_data.price_in("inr"), 5_000_000.0);
        assert_eq!(detail.market_data.market_cap_in("inr"), 98_000_000_000.0);
        assert_eq!(detail.homepage(), Some("https://bitcoin.org"));
        assert_eq!(
            detail.description_text(),
            "Bitcoin is a peer-to-peer currency."
        );
    }
}
