//! Per-coin detail state: the joined detail + chart result for the coin
//! currently open in the detail view.
//!
//! The two upstream requests are joined all-or-nothing before they reach
//! this module; a commit therefore carries either both payloads or one
//! combined error. The same sequence guard as the list store applies, so a
//! response for a coin or time range the user has already navigated away
//! from is dropped.

use chrono::{DateTime, Local};

use crate::data::{CoinDetail, MarketChart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Day,
    Week,
    #[default]
    Month,
}

impl TimeRange {
    pub fn days(self) -> u32 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            TimeRange::Day => TimeRange::Week,
            TimeRange::Week => TimeRange::Month,
            TimeRange::Month => TimeRange::Day,
        }
    }
}

/// One chart point: price plus a date label derived from the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: i64,
    pub price: f64,
    pub label: String,
}

/// Project the raw `(timestamp, price)` pairs into labeled points, keeping
/// the upstream ascending order.
pub fn project_series(chart: &MarketChart) -> Vec<PricePoint> {
    chart
        .prices
        .iter()
        .map(|&(timestamp, price)| PricePoint {
            timestamp,
            price,
            label: date_label(timestamp),
        })
        .collect()
}

fn date_label(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|utc| utc.with_timezone(&Local).format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Rendered payload of the detail view once both requests have succeeded.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub detail: CoinDetail,
    pub series: Vec<PricePoint>,
}

#[derive(Debug, Default)]
pub struct DetailLoader {
    view: Option<DetailView>,
    coin_id: Option<String>,
    time_range: TimeRange,
    loading: bool,
    error: Option<String>,
    seq: u64,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `id` over `range`, returning the sequence token the
    /// completion must carry. Any change of id or range goes through here,
    /// which is what restarts both requests.
    pub fn begin(&mut self, id: String, range: TimeRange) -> u64 {
        self.coin_id = Some(id);
        self.time_range = range;
        self.loading = true;
        self.error = None;
        self.seq += 1;
        self.seq
    }

    /// Commit a joined completion. Stale sequences are dropped, a failure
    /// leaves no partial view behind.
    pub fn commit(&mut self, seq: u64, result: Result<(CoinDetail, MarketChart), String>) {
        if seq != self.seq {
            log::debug!("discarding stale detail fetch (seq {seq}, latest {})", self.seq);
            return;
        }
        self.loading = false;
        match result {
            Ok((detail, chart)) => {
                let series = project_series(&chart);
                log::info!("detail committed for {} ({} points)", detail.id, series.len());
                self.view = Some(DetailView { detail, series });
                self.error = None;
            }
            Err(cause) => {
                log::warn!("detail fetch failed: {cause}");
                self.view = None;
                self.error = Some(format!("Error fetching coin details: {cause}"));
            }
        }
    }

    /// Leaving the detail view; drop everything so the next open starts
    /// from a clean loading state.
    pub fn close(&mut self) {
        self.view = None;
        self.coin_id = None;
        self.loading = false;
        self.error = None;
    }

    pub fn coin_id(&self) -> Option<&str> {
        self.coin_id.as_deref()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn detail(id: &str) -> CoinDetail {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": id,
            "symbol": id,
            "market_data": {
                "current_price": HashMap::from([("inr".to_string(), 100.0)]),
                "market_cap": HashMap::from([("inr".to_string(), 1000.0)]),
                "price_change_percentage_24h": 1.0
            }
        }))
        .unwrap()
    }

    fn chart(points: usize) -> MarketChart {
        MarketChart {
            prices: (0..points)
                .map(|i| (1_700_000_000_000 + i as i64 * 86_400_000, i as f64))
                .collect(),
        }
    }

    #[test]
    fn series_keeps_length_and_order() {
        let chart = chart(7);
        let series = project_series(&chart);
        assert_eq!(series.len(), 7);
        assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert!(series.iter().all(|p| !p.label.is_empty()));
    }

    #[test]
    fn successful_join_renders_both_payloads() {
        let mut loader = DetailLoader::new();
        let seq = loader.begin("bitcoin".to_string(), TimeRange::Week);
        assert!(loader.is_loading());

        loader.commit(seq, Ok((detail("bitcoin"), chart(7))));
        let view = loader.view().expect("view after successful join");
        assert_eq!(view.detail.id, "bitcoin");
        assert_eq!(view.series.len(), 7);
        assert!(!loader.is_loading());
        assert!(loader.error().is_none());
    }

    #[test]
    fn failed_join_renders_nothing_partial() {
        let mut loader = DetailLoader::new();
        let seq = loader.begin("bitcoin".to_string(), TimeRange::Day);
        loader.commit(seq, Err("chart request failed".to_string()));

        assert!(loader.view().is_none());
        assert_eq!(
            loader.error(),
            Some("Error fetching coin details: chart request failed")
        );
    }

    #[test]
    fn stale_commit_is_discarded_after_range_change() {
        let mut loader = DetailLoader::new();
        let old = loader.begin("bitcoin".to_string(), TimeRange::Day);
        let new = loader.begin("bitcoin".to_string(), TimeRange::Month);

        loader.commit(old, Ok((detail("bitcoin"), chart(1))));
        assert!(loader.view().is_none(), "stale join must not commit");
        assert!(loader.is_loading());

        loader.commit(new, Ok((detail("bitcoin"), chart(30))));
        assert_eq!(loader.view().unwrap().series.len(), 30);
    }

    #[test]
    fn close_resets_all_state() {
        let mut loader = DetailLoader::new();
        let seq = loader.begin("solana".to_string(), TimeRange::Week);
        loader.commit(seq, Ok((detail("solana"), chart(7))));
        loader.close();
        assert!(loader.view().is_none());
        assert!(loader.coin_id().is_none());
        assert!(!loader.is_loading());
    }
}
