//! Pure list transformation: search filter, gainers/losers filter, and
//! pagination. No state lives here; the output is a function of the inputs
//! only, so the UI can recompute it on every frame.

use crate::config::{PAGE_SIZE, SUGGESTION_LIMIT};
use crate::data::Coin;
use crate::store::FilterBy;

// Callers lowercase the needle once per scan, not once per coin.
fn matches_search(coin: &Coin, needle_lower: &str) -> bool {
    coin.name.to_lowercase().contains(needle_lower)
        || coin.symbol.to_lowercase().contains(needle_lower)
}

fn matches_filter(coin: &Coin, filter_by: FilterBy) -> bool {
    match filter_by {
        FilterBy::All => true,
        FilterBy::Gainers => coin.price_change_percentage_24h > 0.0,
        FilterBy::Losers => coin.price_change_percentage_24h < 0.0,
    }
}

/// Search narrows first, then the gainers/losers filter narrows the result.
/// Empty search keeps all coins.
pub fn filter_coins<'a>(coins: &'a [Coin], search: &str, filter_by: FilterBy) -> Vec<&'a Coin> {
    let needle = search.to_lowercase();
    coins
        .iter()
        .filter(|coin| needle.is_empty() || matches_search(coin, &needle))
        .filter(|coin| matches_filter(coin, filter_by))
        .collect()
}

/// Up to [`SUGGESTION_LIMIT`] name/symbol matches for the dropdown while the
/// user is still typing. Empty input suggests nothing.
pub fn suggestions<'a>(coins: &'a [Coin], input: &str) -> Vec<&'a Coin> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    coins
        .iter()
        .filter(|coin| matches_search(coin, &needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}

pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

/// Items for a 1-based `page`. A page past the end yields an empty slice;
/// no clamping happens here (the page-reset rule in the store is the only
/// clamp).
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(name: &str, symbol: &str, change: f64) -> Coin {
        Coin {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            symbol: symbol.to_string(),
            image: String::new(),
            current_price: 1.0,
            market_cap: 1.0,
            price_change_percentage_24h: change,
        }
    }

    fn sample() -> Vec<Coin> {
        vec![
            coin("Bitcoin", "btc", 2.5),
            coin("Bitcoin Cash", "bch", -1.2),
            coin("Bitcoin SV", "bsv", 0.0),
            coin("Ethereum", "eth", 3.1),
            coin("Solana", "sol", -4.4),
        ]
    }

    #[test]
    fn empty_search_keeps_all() {
        let coins = sample();
        assert_eq!(filter_coins(&coins, "", FilterBy::All).len(), coins.len());
    }

    #[test]
    fn search_matches_name_or_symbol_case_insensitively() {
        let coins = sample();
        let hits = filter_coins(&coins, "BIT", FilterBy::All);
        assert_eq!(hits.len(), 3);
        for hit in &hits {
            let needle = "bit";
            assert!(
                hit.name.to_lowercase().contains(needle)
                    || hit.symbol.to_lowercase().contains(needle)
            );
        }
        // symbol-only match
        let hits = filter_coins(&coins, "ETH", FilterBy::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ethereum");
    }

    #[test]
    fn gainers_and_losers_partition_strictly() {
        let coins = sample();
        let gainers = filter_coins(&coins, "", FilterBy::Gainers);
        let losers = filter_coins(&coins, "", FilterBy::Losers);
        assert!(
            gainers
                .iter()
                .all(|c| c.price_change_percentage_24h > 0.0)
        );
        assert!(losers.iter().all(|c| c.price_change_percentage_24h < 0.0));
        // disjoint, and together they miss exactly the zero-change coins
        assert_eq!(gainers.len() + losers.len(), coins.len() - 1);
        assert!(
            gainers
                .iter()
                .all(|g| losers.iter().all(|l| g.id != l.id))
        );
    }

    #[test]
    fn filters_compose_search_then_mode() {
        let coins = sample();
        let hits = filter_coins(&coins, "bit", FilterBy::Losers);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bitcoin Cash");
    }

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(20), 1);
        assert_eq!(total_pages(21), 2);
        assert_eq!(total_pages(45), 3);
    }

    #[test]
    fn pages_reconstruct_the_filtered_list() {
        let items: Vec<usize> = (0..45).collect();
        let pages = total_pages(items.len());
        assert_eq!(pages, 3);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(page_slice(&items, page));
        }
        assert_eq!(rebuilt, items);
        assert_eq!(page_slice(&items, 1).len(), 20);
        assert_eq!(page_slice(&items, 2).len(), 20);
        assert_eq!(page_slice(&items, 3), &[40, 41, 42, 43, 44]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(page_slice(&items, 2).is_empty());
        assert!(page_slice(&items, 99).is_empty());
    }

    #[test]
    fn suggestions_cap_at_limit() {
        let coins: Vec<Coin> = (0..10)
            .map(|i| coin(&format!("Bitcoin {i}"), "btc", 1.0))
            .collect();
        assert_eq!(suggestions(&coins, "bit").len(), SUGGESTION_LIMIT);
        assert_eq!(suggestions(&coins, "BiTcOiN").len(), SUGGESTION_LIMIT);
        assert!(suggestions(&coins, "").is_empty());
        assert!(suggestions(&coins, "zzz").is_empty());
    }
}
