use const_format::concatcp;

// Root
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

// Paths
pub const MARKETS_API_PATH: &str = "/coins/markets";
pub const COINS_API_PATH: &str = "/coins";

// Endpoints
pub const MARKETS_API: &str = concatcp!(COINGECKO_API_URL, MARKETS_API_PATH);
pub const COINS_API: &str = concatcp!(COINGECKO_API_URL, COINS_API_PATH);

pub fn coin_detail_url(id: &str) -> String {
    format!("{COINS_API}/{id}")
}

pub fn market_chart_url(id: &str, vs_currency: &str, days: u32) -> String {
    format!("{COINS_API}/{id}/market_chart?vs_currency={vs_currency}&days={days}")
}
