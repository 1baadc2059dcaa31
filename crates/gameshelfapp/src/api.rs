//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! all gameshelf operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (parses selector strings, game ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, I/O or formatting.
//!
//! ## Selectors
//!
//! Commands that act on collection items take raw user tokens. [`parse_selectors`] turns
//! them into [`ItemSelector`]s:
//!
//! 1. If every token parses as an index or range (`3`, `1-4`), each becomes a selector,
//!    deduplicated in order.
//! 2. Otherwise all tokens are joined with spaces into ONE term. This lets
//!    `gameshelf rm 1-Nintendo Switch` work without quotes.
//!
//! ## Generic Over StorageBackend
//!
//! `ShelfApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::catalog::{Catalog, CatalogFilter};
use crate::commands::{self, CmdMessage, CmdResult, ItemFilter};
use crate::error::{Result, ShelfError};
use crate::index::{parse_selector, DisplayItem, ItemSelector};
use crate::model::GameId;
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;
use std::collections::HashSet;
use std::path::PathBuf;

/// Where this instance keeps its data.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
    pub collection_file: PathBuf,
    pub config_files: Vec<PathBuf>,
}

/// The main API facade for gameshelf operations.
pub struct ShelfApi<B: StorageBackend> {
    store: CollectionStore<B>,
    catalog: Catalog,
    paths: ShelfPaths,
}

impl<B: StorageBackend> ShelfApi<B> {
    /// Wraps a store, hydrating it if that has not happened yet.
    pub fn new(mut store: CollectionStore<B>, catalog: Catalog, paths: ShelfPaths) -> Self {
        store.hydrate();
        Self {
            store,
            catalog,
            paths,
        }
    }

    pub fn add_game(&mut self, game_id: &str, platform: Option<&str>) -> Result<CmdResult> {
        let game_id = GameId::new(game_id.trim());
        let result = commands::add::run(&mut self.store, &self.catalog, &game_id, platform)?;
        Ok(self.with_save_status(result))
    }

    pub fn list_items(&self, filter: ItemFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn preview_remove<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<DisplayItem>> {
        let selectors = parse_selectors(selectors)?;
        commands::remove::preview(&self.store, &selectors)
    }

    pub fn remove_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let result = commands::remove::run(&mut self.store, &selectors)?;
        Ok(self.with_save_status(result))
    }

    pub fn set_quantity<I: AsRef<str>>(&mut self, selector: &[I], quantity: i64) -> Result<CmdResult> {
        let selector = parse_single(selector)?;
        let result = commands::quantity::set(&mut self.store, &selector, quantity)?;
        Ok(self.with_save_status(result))
    }

    pub fn increment<I: AsRef<str>>(&mut self, selector: &[I]) -> Result<CmdResult> {
        let selector = parse_single(selector)?;
        let result = commands::quantity::increment(&mut self.store, &selector)?;
        Ok(self.with_save_status(result))
    }

    pub fn decrement<I: AsRef<str>>(&mut self, selector: &[I]) -> Result<CmdResult> {
        let selector = parse_single(selector)?;
        let result = commands::quantity::decrement(&mut self.store, &selector)?;
        Ok(self.with_save_status(result))
    }

    pub fn preview_clear(&self) -> commands::clear::ClearPreview {
        commands::clear::preview(&self.store)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        let result = commands::clear::run(&mut self.store)?;
        Ok(self.with_save_status(result))
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn catalog_platforms(&self) -> Result<CmdResult> {
        commands::catalog::platforms(&self.store, &self.catalog)
    }

    pub fn catalog_games(&self, filter: &CatalogFilter) -> Result<CmdResult> {
        commands::catalog::games(&self.store, &self.catalog, filter)
    }

    pub fn catalog_genres(&self) -> Result<CmdResult> {
        commands::catalog::genres(&self.catalog)
    }

    pub fn store(&self) -> &CollectionStore<B> {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn paths(&self) -> &ShelfPaths {
        &self.paths
    }

    /// Mutations keep their in-memory effect when the write fails; say so in the result.
    fn with_save_status(&self, mut result: CmdResult) -> CmdResult {
        if let Some(err) = self.store.last_flush_error() {
            result.add_message(CmdMessage::error(format!(
                "Your collection could not be saved: {}",
                err
            )));
        }
        result
    }
}

/// See the module docs for the grammar.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>> {
    if inputs.is_empty() {
        return Err(ShelfError::Api("No items selected".to_string()));
    }

    let mut selectors = Vec::new();
    let mut all_indexes = true;

    for input in inputs {
        match parse_selector(input.as_ref()) {
            Ok(ItemSelector::Term(_)) => {
                all_indexes = false;
                break;
            }
            Ok(selector) => selectors.push(selector),
            Err(e) => return Err(ShelfError::Api(e)),
        }
    }

    if all_indexes {
        let mut seen = HashSet::new();
        selectors.retain(|s| seen.insert(s.clone()));
        return Ok(selectors);
    }

    let term = inputs
        .iter()
        .map(|s| s.as_ref().trim())
        .collect::<Vec<&str>>()
        .join(" ");
    Ok(vec![ItemSelector::Term(term)])
}

fn parse_single<I: AsRef<str>>(inputs: &[I]) -> Result<ItemSelector> {
    let mut selectors = parse_selectors(inputs)?;
    if selectors.len() != 1 {
        return Err(ShelfError::Api(
            "This command takes a single item".to_string(),
        ));
    }
    Ok(selectors.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::GameRecord;
    use crate::store::mem_backend::MemBackend;

    fn make_api() -> ShelfApi<MemBackend> {
        let catalog = Catalog::new(vec![
            GameRecord::new(1u64, "Zelda").with_platforms(["Nintendo Switch", "Wii U"]),
            GameRecord::new(2u64, "Halo 3").with_platforms(["Xbox 360"]),
        ]);
        let store = CollectionStore::with_backend(MemBackend::new());
        ShelfApi::new(
            store,
            catalog,
            ShelfPaths {
                data_dir: PathBuf::from("memory://"),
                collection_file: PathBuf::from("memory://gameCollection"),
                config_files: Vec::new(),
            },
        )
    }

    #[test]
    fn test_parse_selectors_indexes_dedup() {
        let selectors = parse_selectors(&["1", "2-3", "1"]).unwrap();
        assert_eq!(
            selectors,
            vec![ItemSelector::Index(1), ItemSelector::Range(2, 3)]
        );
    }

    #[test]
    fn test_parse_selectors_joins_terms() {
        let selectors = parse_selectors(&["1-Nintendo", "Switch"]).unwrap();
        assert_eq!(
            selectors,
            vec![ItemSelector::Term("1-Nintendo Switch".into())]
        );
    }

    #[test]
    fn test_parse_selectors_rejects_bad_ranges_and_empty() {
        assert!(parse_selectors(&["4-2"]).is_err());
        assert!(parse_selectors::<&str>(&[]).is_err());
    }

    #[test]
    fn test_api_hydrates_on_construction() {
        let api = make_api();
        assert!(api.store().is_hydrated());
    }

    #[test]
    fn test_add_and_list() {
        let mut api = make_api();
        api.add_game("1", Some("Nintendo Switch")).unwrap();
        api.add_game(" 2 ", None).unwrap();

        let listed = api.list_items(ItemFilter::default()).unwrap().listed_items;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].item.unique_id, "2-Xbox 360");
    }

    #[test]
    fn test_unknown_selector_is_item_not_found() {
        let mut api = make_api();
        api.add_game("2", None).unwrap();

        assert!(matches!(
            api.remove_items(&["5"]),
            Err(ShelfError::ItemNotFound(_))
        ));
        assert!(matches!(
            api.increment(&["1-Wii U"]),
            Err(ShelfError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_quantity_by_spaced_unique_id() {
        let mut api = make_api();
        api.add_game("1", Some("Nintendo Switch")).unwrap();

        api.increment(&["1-Nintendo", "Switch"]).unwrap();
        api.set_quantity(&["1-Nintendo Switch"], 4).unwrap();
        assert_eq!(api.store().total_items(), 4);

        let result = api.decrement(&["1"]).unwrap();
        assert_eq!(result.affected_items[0].item.quantity, 3);
    }

    #[test]
    fn test_quantity_commands_take_one_item() {
        let mut api = make_api();
        api.add_game("1", Some("Nintendo Switch")).unwrap();
        api.add_game("2", None).unwrap();

        assert!(api.increment(&["1", "2"]).is_err());
        assert_eq!(api.store().total_items(), 2);
    }

    #[test]
    fn test_remove_with_preview() {
        let mut api = make_api();
        api.add_game("1", Some("Wii U")).unwrap();
        api.add_game("2", None).unwrap();

        let preview = api.preview_remove(&["1-2"]).unwrap();
        assert_eq!(preview.len(), 2);
        assert_eq!(api.store().len(), 2);

        api.remove_items(&["1-2"]).unwrap();
        assert!(api.store().is_empty());
    }

    #[test]
    fn test_clear_with_preview() {
        let mut api = make_api();
        api.add_game("2", None).unwrap();

        assert_eq!(api.preview_clear().items, 1);
        api.clear().unwrap();
        assert_eq!(api.preview_clear().items, 0);
    }

    #[test]
    fn test_catalog_views() {
        let mut api = make_api();
        api.add_game("2", None).unwrap();

        assert_eq!(api.catalog_platforms().unwrap().platforms.len(), 3);
        let rows = api
            .catalog_games(&CatalogFilter {
                platform: Some("Xbox 360".into()),
                ..Default::default()
            })
            .unwrap()
            .catalog_games;
        assert_eq!(rows.len(), 1);
        assert!(rows[0].in_collection);
        assert!(api.catalog_genres().unwrap().genres.is_empty());
    }

    #[test]
    fn test_stats_summary() {
        let mut api = make_api();
        api.add_game("2", None).unwrap();
        let result = api.stats().unwrap();
        assert_eq!(result.stats.unwrap().total_value, 150.0);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn test_failed_save_is_reported_as_error_message() {
        let mut api = make_api();
        api.store().backend().set_simulate_write_error(true);

        let result = api.add_game("2", None).unwrap();
        assert_eq!(api.store().len(), 1);
        let last = result.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Error);
        assert!(last.content.contains("could not be saved"));

        api.store().backend().set_simulate_write_error(false);
        let result = api.increment(&["1"]).unwrap();
        assert!(result
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Error));
    }
}
