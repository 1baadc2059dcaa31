//! # Catalog Lookup
//!
//! The catalog is the shop's static list of games. It is read-only: nothing in gameshelf
//! ever writes to it. The collection store only reads records out of it to snapshot their
//! display fields at add time.
//!
//! ## Document Format
//!
//! ```json
//! { "games": [ { "id": 1, "name": "...", "genres": ["..."], "platforms": [ { "name": "PC", "storage": "9 GB" } ] } ] }
//! ```
//!
//! Older exports use `juegos` for the list and the legacy field names described in
//! [`crate::model`]; both are accepted. A bare JSON array of records is accepted too.
//!
//! A catalog is compiled into the library ([`Catalog::bundled`]); configuration can point
//! at a different file instead.
//!
//! ## Views
//!
//! All views borrow from the catalog and never reorder or mutate it:
//! - [`Catalog::filter`]: lazy iterator by platform / search text / genre
//! - [`Catalog::platforms`]: one row per platform (alphabetical) with game count and price
//! - [`Catalog::listings`]: one entry per game+platform pair, bound to that platform, with
//!   storage info
//! - [`Catalog::genres`]: distinct genres in first-seen order

use crate::error::Result;
use crate::model::{GameId, GameRecord};
use crate::pricing::PriceTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped {
        #[serde(alias = "juegos")]
        games: Vec<GameRecord>,
    },
    Bare(Vec<GameRecord>),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

/// Criteria for [`Catalog::filter`]. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub platform: Option<String>,
    pub search: Option<String>,
    pub genre: Option<String>,
}

impl CatalogFilter {
    pub fn matches(&self, game: &GameRecord) -> bool {
        if let Some(platform) = &self.platform {
            if !game.is_available_on(platform) {
                return false;
            }
        }

        if let Some(term) = self.search.as_deref().map(str::trim) {
            if !term.is_empty()
                && !game
                    .display_name()
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        if let Some(genre) = &self.genre {
            if !game.genre_names().contains(&genre.as_str()) {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub name: String,
    pub game_count: usize,
    pub price: f64,
}

/// A catalog game as seen from one platform's listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformGame {
    /// The record, with `platform` set to the listing's platform.
    pub game: GameRecord,
    pub platform: String,
    pub storage: Option<String>,
}

impl Catalog {
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    /// The catalog shipped with the library.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let games = match serde_json::from_str::<CatalogDocument>(text)? {
            CatalogDocument::Wrapped { games } => games,
            CatalogDocument::Bare(games) => games,
        };
        Ok(Self { games })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, id: &GameId) -> Option<&GameRecord> {
        self.games.iter().find(|g| &g.id == id)
    }

    pub fn filter<'a>(
        &'a self,
        filter: &'a CatalogFilter,
    ) -> impl Iterator<Item = &'a GameRecord> + 'a {
        self.games.iter().filter(move |g| filter.matches(g))
    }

    pub fn platforms(&self, prices: &PriceTable) -> Vec<PlatformSummary> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for game in &self.games {
            let distinct: HashSet<&str> = game.platform_names().collect();
            for platform in distinct {
                *counts.entry(platform).or_default() += 1;
            }
        }

        counts
            .into_iter()
            .map(|(name, game_count)| PlatformSummary {
                name: name.to_string(),
                game_count,
                price: prices.price_for(name),
            })
            .collect()
    }

    /// Games matching `filter`, one entry per platform they are sold on.
    ///
    /// With a platform in the filter, only that platform's entry is produced.
    pub fn listings(&self, filter: &CatalogFilter) -> Vec<PlatformGame> {
        self.filter(filter)
            .flat_map(move |game| {
                game.platforms
                    .iter()
                    .filter(move |availability| {
                        filter
                            .platform
                            .as_deref()
                            .map_or(true, |wanted| availability.name == wanted)
                    })
                    .map(move |availability| PlatformGame {
                        game: game.on_platform(&availability.name),
                        platform: availability.name.clone(),
                        storage: availability.storage.clone(),
                    })
            })
            .collect()
    }

    pub fn genres(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut genres = Vec::new();
        for game in &self.games {
            for genre in game.genre_names() {
                if seen.insert(genre) {
                    genres.push(genre.to_string());
                }
            }
        }
        genres
    }
}
