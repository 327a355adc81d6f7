use ratatui::style::palette::tailwind;

pub const PALETTES: [tailwind::Palette; 4] = [
    tailwind::CYAN,
    tailwind::EMERALD,
    tailwind::INDIGO,
    tailwind::RED,
];

pub const POLL_DURATION_MS: u64 = 50;
pub const ITEM_HEIGHT: usize = 1;

/// Quote currency for every endpoint and for the `market_data` lookup keys.
pub const VS_CURRENCY: &str = "inr";
pub const CURRENCY_SYMBOL: &str = "₹";

/// Coins requested per market fetch (server-side sorted, single page).
pub const FETCH_PER_PAGE: u32 = 100;

/// Client-side page size for the list view.
pub const PAGE_SIZE: usize = 20;

/// Quiet period before typed search input is committed to the query state.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Maximum entries in the search suggestion dropdown.
pub const SUGGESTION_LIMIT: usize = 5;

pub const HTTP_TIMEOUT_SECS: u64 = 30;
