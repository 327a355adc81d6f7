//! Coin list state: the fetched market snapshot, the query the user has
//! built up (search / sort / filter / page), and loading/error flags.
//!
//! Fetch completions arrive through [`CoinStore::commit`] tagged with the
//! sequence number handed out by [`CoinStore::begin_fetch`]; anything but the
//! most recently issued sequence is discarded, so a slow response can never
//! overwrite a fresher one.

pub mod pipeline;

use crate::data::Coin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    MarketCapDesc,
    MarketCapAsc,
    PriceDesc,
    PriceAsc,
    Change24hDesc,
}

impl SortBy {
    /// Value of the `order` query parameter on the markets endpoint.
    pub fn order_param(self) -> &'static str {
        match self {
            SortBy::MarketCapDesc => "market_cap_desc",
            SortBy::MarketCapAsc => "market_cap_asc",
            SortBy::PriceDesc => "current_price_desc",
            SortBy::PriceAsc => "current_price_asc",
            SortBy::Change24hDesc => "price_change_percentage_24h_desc",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            SortBy::MarketCapDesc => SortBy::MarketCapAsc,
            SortBy::MarketCapAsc => SortBy::PriceDesc,
            SortBy::PriceDesc => SortBy::PriceAsc,
            SortBy::PriceAsc => SortBy::Change24hDesc,
            SortBy::Change24hDesc => SortBy::MarketCapDesc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterBy {
    #[default]
    All,
    Gainers,
    Losers,
}

impl FilterBy {
    pub fn cycle(self) -> Self {
        match self {
            FilterBy::All => FilterBy::Gainers,
            FilterBy::Gainers => FilterBy::Losers,
            FilterBy::Losers => FilterBy::All,
        }
    }
}

/// User-driven query over the fetched list. `page` is 1-based and resets to 1
/// whenever `search` or `filter_by` changes; a sort change does not touch it
/// because sorting is resolved by a re-fetch, not by re-slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub sort_by: SortBy,
    pub filter_by: FilterBy,
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortBy::default(),
            filter_by: FilterBy::default(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn set_search(&mut self, search: String) {
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_filter(&mut self, filter_by: FilterBy) {
        if filter_by != self.filter_by {
            self.filter_by = filter_by;
            self.page = 1;
        }
    }

    /// Returns true when the mode actually changed, which is the caller's cue
    /// to issue a new fetch.
    pub fn set_sort(&mut self, sort_by: SortBy) -> bool {
        if sort_by == self.sort_by {
            return false;
        }
        self.sort_by = sort_by;
        true
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

#[derive(Debug, Default)]
pub struct CoinStore {
    coins: Vec<Coin>,
    pub query: QueryState,
    loading: bool,
    error: Option<String>,
    seq: u64,
}

impl CoinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new in-flight fetch and return its sequence token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Apply a fetch completion. Only the most recently issued sequence may
    /// commit; earlier completions are stale and dropped.
    pub fn commit(&mut self, seq: u64, result: Result<Vec<Coin>, String>) {
        if seq != self.seq {
            log::debug!("discarding stale market fetch (seq {seq}, latest {})", self.seq);
            return;
        }
        self.loading = false;
        match result {
            Ok(coins) => {
                log::info!("market fetch committed: {} coins", coins.len());
                self.coins = coins;
                self.error = None;
            }
            Err(cause) => {
                log::warn!("market fetch failed: {cause}");
                self.error = Some(format!("Error fetching crypto coins: {cause}"));
            }
        }
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current filtered view, before pagination.
    pub fn filtered(&self) -> Vec<&Coin> {
        pipeline::filter_coins(&self.coins, &self.query.search, self.query.filter_by)
    }
}
