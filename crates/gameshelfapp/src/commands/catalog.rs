//! Catalog views for browsing what the shop sells, annotated with what the collection
//! already holds.

use crate::catalog::{Catalog, CatalogFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{GameId, GameSnapshot};
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;
use serde::Serialize;

/// One game+platform pair the shop sells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRow {
    pub game_id: GameId,
    pub name: String,
    pub genre: String,
    pub year: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    pub price: f64,
    pub in_collection: bool,
}

pub fn platforms<B: StorageBackend>(
    store: &CollectionStore<B>,
    catalog: &Catalog,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.platforms = catalog.platforms(store.prices());
    if result.platforms.is_empty() {
        result.add_message(CmdMessage::info("The catalog lists no platforms"));
    }
    Ok(result)
}

/// Catalog games matching `filter`, one row per platform the game is sold on.
///
/// With a platform in the filter, only that platform's row is produced.
pub fn games<B: StorageBackend>(
    store: &CollectionStore<B>,
    catalog: &Catalog,
    filter: &CatalogFilter,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for listing in catalog.listings(filter) {
        let snapshot = GameSnapshot::from_record(&listing.game);
        let in_collection = store.is_in_collection(&listing.game.id, &listing.platform);
        result.catalog_games.push(CatalogRow {
            game_id: listing.game.id,
            name: snapshot.name,
            genre: snapshot.genre,
            year: snapshot.year,
            price: store.prices().price_for(&listing.platform),
            platform: listing.platform,
            storage: listing.storage,
            in_collection,
        });
    }

    if result.catalog_games.is_empty() {
        result.add_message(CmdMessage::info("No catalog games match"));
    }
    Ok(result)
}

pub fn genres(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.genres = catalog.genres();
    if result.genres.is_empty() {
        result.add_message(CmdMessage::info("The catalog lists no genres"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::model::GameRecord;

    #[test]
    fn platforms_are_sorted_and_priced() {
        let store = test_utils::mem_store();
        let result = platforms(&store, &test_utils::sample_catalog()).unwrap();

        let names: Vec<&str> = result.platforms.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Atari 2600", "Nintendo Switch", "Wii U", "Xbox 360"]
        );
        assert_eq!(result.platforms[0].price, 150.0);
        assert_eq!(result.platforms[1].game_count, 2);
    }

    #[test]
    fn games_expand_per_platform() {
        let store = test_utils::mem_store();
        let result = games(&store, &test_utils::sample_catalog(), &CatalogFilter::default()).unwrap();

        assert_eq!(result.catalog_games.len(), 5);
        assert_eq!(result.catalog_games[0].platform, "Nintendo Switch");
        assert_eq!(result.catalog_games[1].platform, "Wii U");
    }

    #[test]
    fn games_mark_owned_pairs() {
        let mut store = test_utils::mem_store();
        store
            .add(&GameRecord::new(1u64, "Zelda"), Some("Wii U"))
            .unwrap();

        let filter = CatalogFilter {
            search: Some("zelda".into()),
            ..Default::default()
        };
        let result = games(&store, &test_utils::sample_catalog(), &filter).unwrap();

        let owned: Vec<(&str, bool)> = result
            .catalog_games
            .iter()
            .map(|r| (r.platform.as_str(), r.in_collection))
            .collect();
        assert_eq!(owned, vec![("Nintendo Switch", false), ("Wii U", true)]);
    }

    #[test]
    fn platform_filter_limits_rows() {
        let store = test_utils::mem_store();
        let filter = CatalogFilter {
            platform: Some("Nintendo Switch".into()),
            ..Default::default()
        };
        let result = games(&store, &test_utils::sample_catalog(), &filter).unwrap();

        assert_eq!(result.catalog_games.len(), 2);
        assert!(result
            .catalog_games
            .iter()
            .all(|r| r.platform == "Nintendo Switch" && r.price == 200.0));
    }

    #[test]
    fn genre_filter_and_empty_result() {
        let store = test_utils::mem_store();
        let filter = CatalogFilter {
            genre: Some("Racing".into()),
            ..Default::default()
        };
        let result = games(&store, &test_utils::sample_catalog(), &filter).unwrap();
        assert!(result.catalog_games.is_empty());
        assert_eq!(result.messages[0].content, "No catalog games match");
    }

    #[test]
    fn genres_in_first_seen_order() {
        let result = genres(&test_utils::sample_catalog()).unwrap();
        assert_eq!(result.genres, vec!["Adventure", "Platformer", "Shooter"]);
    }
}
