pub mod coin;

pub use coin::{Coin, CoinDetail, MarketChart};
