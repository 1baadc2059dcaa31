//! # Platform Price Table
//!
//! Every game sells for a flat price decided by its platform. The table is shared by the
//! catalog views (to show "from $X" per platform) and by the collection store, which is
//! the only place a price gets frozen into a [`crate::model::CollectionItem`].
//!
//! Lookup is by exact platform string. Anything not in the table gets the default price.
//! Configuration can override individual entries and the default
//! (see [`crate::config::ShelfConfig`]).

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_PRICE: f64 = 150.00;

static BUILTIN_PRICES: Lazy<BTreeMap<&'static str, f64>> = Lazy::new(|| {
    BTreeMap::from([
        ("Nintendo DS", 25.00),
        ("Nintendo 3DS", 100.00),
        ("Wii", 100.00),
        ("Wii U", 150.00),
        ("Nintendo Switch", 200.00),
        ("Xbox 360", 150.00),
        ("PSP", 70.00),
        ("PS Vita", 100.00),
        ("PlayStation 2", 100.00),
        ("PlayStation 3", 150.00),
        ("PlayStation 4", 200.00),
        ("PC", 200.00),
    ])
});

#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    prices: BTreeMap<String, f64>,
    default_price: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            prices: BUILTIN_PRICES
                .iter()
                .map(|(platform, price)| (platform.to_string(), *price))
                .collect(),
            default_price: DEFAULT_PRICE,
        }
    }
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_price(mut self, price: f64) -> Self {
        self.default_price = price;
        self
    }

    /// Merges per-platform overrides over the current entries.
    pub fn with_overrides(mut self, overrides: &HashMap<String, f64>) -> Self {
        for (platform, price) in overrides {
            self.prices.insert(platform.clone(), *price);
        }
        self
    }

    pub fn price_for(&self, platform: &str) -> f64 {
        self.prices
            .get(platform)
            .copied()
            .unwrap_or(self.default_price)
    }
}
