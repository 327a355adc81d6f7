//! Static English/Hindi label table for the UI, mirroring the two shipped
//! locales.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Hi,
            Lang::Hi => Lang::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Coin,
    Symbol,
    Price,
    MarketCap,
    Change24h,
    MarketData,
    Description,
    PriceHistory,
    VisitWebsite,
    BackToList,
    Search,
    Loading,
    Page,
    SortLabel,
    FilterLabel,
    MarketCapDesc,
    MarketCapAsc,
    PriceDesc,
    PriceAsc,
    Change24hDesc,
    AllCoins,
    Gainers,
    Losers,
    OneDay,
    SevenDays,
    ThirtyDays,
    TimeRange,
    ThemeLabel,
    LanguageLabel,
    HelpListNav,
    HelpListControls,
}

pub fn t(lang: Lang, key: Key) -> &'static str {
    match lang {
        Lang::En => english(key),
        Lang::Hi => hindi(key),
    }
}

pub fn no_results(lang: Lang, search: &str) -> String {
    match lang {
        Lang::En => format!("No results for \"{search}\""),
        Lang::Hi => format!("\"{search}\" के लिए कोई परिणाम नहीं"),
    }
}

fn english(key: Key) -> &'static str {
    match key {
        Key::Coin => "Coin",
        Key::Symbol => "Symbol",
        Key::Price => "Price",
        Key::MarketCap => "Market Cap",
        Key::Change24h => "24h Change",
        Key::MarketData => "Market Data",
        Key::Description => "Description",
        Key::PriceHistory => "Price History",
        Key::VisitWebsite => "Website",
        Key::BackToList => "Back to list",
        Key::Search => "Search",
        Key::Loading => "Loading...",
        Key::Page => "Page",
        Key::SortLabel => "Sort",
        Key::FilterLabel => "Filter",
        Key::MarketCapDesc => "Market Cap ↓",
        Key::MarketCapAsc => "Market Cap ↑",
        Key::PriceDesc => "Price ↓",
        Key::PriceAsc => "Price ↑",
        Key::Change24hDesc => "24h Change ↓",
        Key::AllCoins => "All Coins",
        Key::Gainers => "Gainers",
        Key::Losers => "Losers",
        Key::OneDay => "1 Day",
        Key::SevenDays => "7 Days",
        Key::ThirtyDays => "30 Days",
        Key::TimeRange => "time range",
        Key::ThemeLabel => "theme",
        Key::LanguageLabel => "language",
        Key::HelpListNav => {
            "(Esc) quit | (↑/↓) move row | (←/→) page | (Enter) details | (/) search"
        }
        Key::HelpListControls => {
            "(s) sort | (f) filter | (t) theme | (i) language | (Shift + →/←) cycle color"
        }
    }
}

fn hindi(key: Key) -> &'static str {
    match key {
        Key::Coin => "कॉइन",
        Key::Symbol => "प्रतीक",
        Key::Price => "मूल्य",
        Key::MarketCap => "बाज़ार पूंजीकरण",
        Key::Change24h => "24 घंटे का बदलाव",
        Key::MarketData => "बाज़ार डेटा",
        Key::Description => "विवरण",
        Key::PriceHistory => "मूल्य इतिहास",
        Key::VisitWebsite => "वेबसाइट",
        Key::BackToList => "सूची पर वापस",
        Key::Search => "खोजें",
        Key::Loading => "लोड हो रहा है...",
        Key::Page => "पृष्ठ",
        Key::SortLabel => "क्रम",
        Key::FilterLabel => "फ़िल्टर",
        Key::MarketCapDesc => "बाज़ार पूंजीकरण ↓",
        Key::MarketCapAsc => "बाज़ार पूंजीकरण ↑",
        Key::PriceDesc => "मूल्य ↓",
        Key::PriceAsc => "मूल्य ↑",
        Key::Change24hDesc => "24 घंटे का बदलाव ↓",
        Key::AllCoins => "सभी कॉइन",
        Key::Gainers => "बढ़त वाले",
        Key::Losers => "गिरावट वाले",
        Key::OneDay => "1 दिन",
        Key::SevenDays => "7 दिन",
        Key::ThirtyDays => "30 दिन",
        Key::TimeRange => "समय सीमा",
        Key::ThemeLabel => "थीम",
        Key::LanguageLabel => "भाषा",
        Key::HelpListNav => {
            "(Esc) बाहर | (↑/↓) पंक्ति | (←/→) पृष्ठ | (Enter) विवरण | (/) खोजें"
        }
        Key::HelpListControls => {
            "(s) क्रम | (f) फ़िल्टर | (t) थीम | (i) भाषा | (Shift + →/←) रंग बदलें"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [Key; 31] = [
        Key::Coin,
        Key::Symbol,
        Key::Price,
        Key::MarketCap,
        Key::Change24h,
        Key::MarketData,
        Key::Description,
        Key::PriceHistory,
        Key::VisitWebsite,
        Key::BackToList,
        Key::Search,
        Key::Loading,
        Key::Page,
        Key::SortLabel,
        Key::FilterLabel,
        Key::MarketCapDesc,
        Key::MarketCapAsc,
        Key::PriceDesc,
        Key::PriceAsc,
        Key::Change24hDesc,
        Key::AllCoins,
        Key::Gainers,
        Key::Losers,
        Key::OneDay,
        Key::SevenDays,
        Key::ThirtyDays,
        Key::TimeRange,
        Key::ThemeLabel,
        Key::LanguageLabel,
        Key::HelpListNav,
        Key::HelpListControls,
    ];

    #[test]
    fn every_key_is_translated_in_both_locales() {
        for key in ALL_KEYS {
            assert!(!t(Lang::En, key).is_empty());
            assert!(!t(Lang::Hi, key).is_empty());
        }
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(Lang::En.toggle(), Lang::Hi);
        assert_eq!(Lang::Hi.toggle(), Lang::En);
    }

    #[test]
    fn footer_help_lines_follow_the_language_toggle() {
        for key in [Key::HelpListNav, Key::HelpListControls] {
            assert_ne!(t(Lang::En, key), t(Lang::Hi, key));
        }
    }

    #[test]
    fn no_results_embeds_the_search_text() {
        assert!(no_results(Lang::En, "bit").contains("bit"));
        assert!(no_results(Lang::Hi, "bit").contains("bit"));
    }
}
