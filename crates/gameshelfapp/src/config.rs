//! # Configuration
//!
//! Gameshelf configuration is declared with [`confique`] and loaded in layers.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `GAMESHELF_STORAGE_KEY`, `GAMESHELF_DEFAULT_PRICE`,
//!    `GAMESHELF_CATALOG`.
//! 2. **Data-dir config**: `<data dir>/gameshelf.toml`, next to the collection blob.
//! 3. **User config**: `gameshelf.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 4. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `gameCollection` | Key the collection blob is stored under |
//! | `default_price` | `150.0` | Price for platforms missing from the price table |
//! | `catalog` | bundled | Path to a catalog JSON file |
//! | `prices` | none | Per-platform price overrides (`[prices]` table) |
//!
//! ## Example
//!
//! ```toml
//! storage_key = "gameCollection"
//! default_price = 120.0
//!
//! [prices]
//! "Atari 2600" = 15.0
//! "PC" = 180.0
//! ```

use crate::error::Result;
use crate::pricing::{PriceTable, DEFAULT_PRICE};
use crate::store::DEFAULT_STORAGE_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "gameshelf.toml";

/// Configuration for gameshelf, stored in `gameshelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShelfConfig {
    /// Key the collection blob is stored under.
    #[config(env = "GAMESHELF_STORAGE_KEY", default = "gameCollection")]
    pub storage_key: String,

    /// Price for any platform the price table does not list.
    #[config(env = "GAMESHELF_DEFAULT_PRICE", default = 150.0)]
    pub default_price: f64,

    /// Catalog file to use instead of the bundled one.
    #[config(env = "GAMESHELF_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Per-platform price overrides.
    pub prices: Option<HashMap<String, f64>>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_price: DEFAULT_PRICE,
            catalog: None,
            prices: None,
        }
    }
}

impl ShelfConfig {
    /// Loads config from the environment and the given files, earlier files winning.
    /// Missing files are skipped.
    pub fn load_from<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        Ok(builder.load()?)
    }

    /// The built-in price table with this config's overrides applied.
    pub fn price_table(&self) -> PriceTable {
        let table = PriceTable::default().with_default_price(self.default_price);
        match &self.prices {
            Some(overrides) => table.with_overrides(overrides),
            None => table,
        }
    }

    /// A commented sample `gameshelf.toml` with every setting at its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
