use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::{unique_id, CollectionItem, CollectionStats, GameId, GameRecord, GameSnapshot};
use crate::pricing::PriceTable;
use std::collections::HashSet;

/// Storage key holding the whole collection blob.
pub const DEFAULT_STORAGE_KEY: &str = "gameCollection";

/// The authoritative in-memory collection, mirrored to a storage backend.
///
/// Every mutation ends with a write of the full collection under one key, except
/// [`clear`](Self::clear), which removes the key instead. Writes are best effort: a failed
/// write is logged and remembered in [`last_flush_error`](Self::last_flush_error), and the
/// in-memory change stands.
pub struct CollectionStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
    prices: PriceTable,
    items: Vec<CollectionItem>,
    hydrated: bool,
    last_flush_error: Option<String>,
}

impl<B: StorageBackend> CollectionStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
            prices: PriceTable::default(),
            items: Vec::new(),
            hydrated: false,
            last_flush_error: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn last_flush_error(&self) -> Option<&str> {
        self.last_flush_error.as_deref()
    }

    // --- Persistence ---

    /// Load the persisted collection. Runs once; later calls do nothing.
    ///
    /// A missing, unreadable or malformed blob leaves the collection as it is
    /// (empty at startup). Nothing is propagated to the caller.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            log::debug!("Collection already hydrated, skipping");
            return;
        }
        self.hydrated = true;

        match self.backend.load(&self.key) {
            Ok(Some(blob)) => match decode_items(&blob) {
                Ok(items) => {
                    log::debug!("Hydrated {} collection items", items.len());
                    self.items = items;
                }
                Err(reason) => {
                    log::warn!("Ignoring persisted collection under {:?}: {}", self.key, reason);
                }
            },
            Ok(None) => log::debug!("No persisted collection under {:?}", self.key),
            Err(e) => log::warn!("Could not read persisted collection: {}", e),
        }
    }

    fn flush(&mut self) {
        let outcome = serde_json::to_string(&self.items)
            .map_err(ShelfError::Serialization)
            .and_then(|blob| self.backend.save(&self.key, &blob));

        match outcome {
            Ok(()) => {
                log::debug!("Flushed {} collection items", self.items.len());
                self.last_flush_error = None;
            }
            Err(e) => {
                log::error!("Failed to save collection: {}", e);
                self.last_flush_error = Some(e.to_string());
            }
        }
    }

    // --- Mutations ---

    /// Add `game` on `platform` (or on the record's own platform) with quantity 1.
    ///
    /// Returns `Ok(false)` without touching anything when that game+platform is already
    /// present. Fails only when no platform can be resolved.
    pub fn add(&mut self, game: &GameRecord, platform: Option<&str>) -> Result<bool> {
        let target = platform
            .filter(|p| !p.is_empty())
            .or(game.platform.as_deref())
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ShelfError::MissingPlatform(game.id.to_string()))?;

        let id = unique_id(&game.id, target);
        if self.position(&id).is_some() {
            log::debug!("{} is already in the collection", id);
            return Ok(false);
        }

        let price = self.prices.price_for(target);
        let item = CollectionItem::new(
            game.id.clone(),
            target,
            GameSnapshot::from_record(game),
            price,
        );
        self.items.push(item);
        self.flush();
        Ok(true)
    }

    /// Returns whether an item was removed.
    pub fn remove(&mut self, unique_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.unique_id != unique_id);
        let removed = self.items.len() != before;
        self.flush();
        removed
    }

    /// Set the quantity of an item. Zero or negative removes it.
    /// Returns whether an item was affected.
    pub fn set_quantity(&mut self, unique_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(unique_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let found = match self.position(unique_id) {
            Some(pos) => {
                self.items[pos].quantity = quantity;
                true
            }
            None => false,
        };
        self.flush();
        found
    }

    pub fn increment(&mut self, unique_id: &str) -> bool {
        let found = match self.position(unique_id) {
            Some(pos) => {
                let item = &mut self.items[pos];
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        };
        self.flush();
        found
    }

    /// Lower the quantity by one, never below 1. Decrement never removes an item.
    /// Returns whether the quantity changed.
    pub fn decrement(&mut self, unique_id: &str) -> bool {
        let changed = match self.position(unique_id) {
            Some(pos) if self.items[pos].quantity > 1 => {
                self.items[pos].quantity -= 1;
                true
            }
            _ => false,
        };
        self.flush();
        changed
    }

    /// Empty the collection and delete the persisted blob.
    pub fn clear(&mut self) {
        self.items.clear();
        match self.backend.delete(&self.key) {
            Ok(()) => {
                log::debug!("Cleared collection and removed {:?}", self.key);
                self.last_flush_error = None;
            }
            Err(e) => {
                log::error!("Failed to remove persisted collection: {}", e);
                self.last_flush_error = Some(e.to_string());
            }
        }
    }

    // --- Reads ---

    fn position(&self, unique_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.unique_id == unique_id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    pub fn snapshot(&self) -> Vec<CollectionItem> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, unique_id: &str) -> Option<&CollectionItem> {
        self.position(unique_id).map(|pos| &self.items[pos])
    }

    pub fn get_item(&self, game_id: &GameId, platform: &str) -> Option<&CollectionItem> {
        self.get(&unique_id(game_id, platform))
    }

    pub fn is_in_collection(&self, game_id: &GameId, platform: &str) -> bool {
        self.get_item(game_id, platform).is_some()
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CollectionItem::line_total).sum()
    }

    pub fn stats(&self) -> CollectionStats {
        let mut platforms: Vec<String> = Vec::new();
        let mut genres: Vec<String> = Vec::new();
        for item in &self.items {
            if !platforms.contains(&item.platform) {
                platforms.push(item.platform.clone());
            }
            if !item.genre.is_empty() && !genres.contains(&item.genre) {
                genres.push(item.genre.clone());
            }
        }

        CollectionStats {
            total_games: self.items.len(),
            total_items: self.total_items(),
            total_value: self.total_price(),
            platform_count: platforms.len(),
            genre_count: genres.len(),
            platforms,
            genres,
        }
    }
}

/// Parse a persisted blob, rejecting it whole if it breaks the collection invariants.
fn decode_items(blob: &str) -> std::result::Result<Vec<CollectionItem>, String> {
    let items: Vec<CollectionItem> = serde_json::from_str(blob).map_err(|e| e.to_string())?;

    let mut seen = HashSet::new();
    for item in &items {
        if item.quantity == 0 {
            return Err(format!("{} has quantity 0", item.unique_id));
        }
        if !seen.insert(item.unique_id.as_str()) {
            return Err(format!("{} appears more than once", item.unique_id));
        }
    }

    Ok(items)
}
