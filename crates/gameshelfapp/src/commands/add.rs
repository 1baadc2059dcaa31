use crate::catalog::Catalog;
use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::index::index_items;
use crate::model::{unique_id, GameId};
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;

/// Adds a catalog game to the collection.
///
/// Without an explicit platform, a game sold on exactly one platform is added for that
/// platform; otherwise the platform must be given.
pub fn run<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    catalog: &Catalog,
    game_id: &GameId,
    platform: Option<&str>,
) -> Result<CmdResult> {
    let game = catalog.get(game_id).ok_or_else(|| {
        log::warn!("No catalog entry for game {}", game_id);
        ShelfError::GameNotFound(game_id.to_string())
    })?;

    let platform = match platform {
        Some(p) => {
            if !game.platforms.is_empty() && !game.is_available_on(p) {
                let available: Vec<&str> = game.platform_names().collect();
                return Err(ShelfError::Api(format!(
                    "{} is not available on {} (available on: {})",
                    game.display_name(),
                    p,
                    available.join(", ")
                )));
            }
            Some(p.to_string())
        }
        None => {
            let mut names = game.platform_names();
            match (names.next(), names.next()) {
                (Some(only), None) => Some(only.to_string()),
                _ => game.platform.clone(),
            }
        }
    };

    let bound = match &platform {
        Some(p) => game.on_platform(p),
        None => game.clone(),
    };
    let added = store.add(&bound, None)?;

    // add() succeeded, so a platform was resolved
    let platform = platform.unwrap_or_default();
    let label = describe(bound.display_name(), &platform);
    let mut result = CmdResult::default();

    if added {
        let key = unique_id(&bound.id, &platform);
        result.affected_items = index_items(store.items())
            .into_iter()
            .filter(|d| d.item.unique_id == key)
            .collect();
        result.add_message(CmdMessage::success(format!(
            "Added {} to your collection",
            label
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} is already in your collection",
            label
        )));
    }

    Ok(result)
}
