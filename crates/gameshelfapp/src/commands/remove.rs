use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayItem, ItemSelector};
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;

use super::helpers::resolve_selectors;

/// Returns the items a removal would drop, without touching the store.
///
/// Use this to show a confirmation prompt in the CLI before calling `run`.
pub fn preview<B: StorageBackend>(
    store: &CollectionStore<B>,
    selectors: &[ItemSelector],
) -> Result<Vec<DisplayItem>> {
    resolve_selectors(store, selectors)
}

/// Removes the selected items.
///
/// All selectors are resolved before anything is removed, so a bad selector removes nothing.
/// This function does NOT prompt for confirmation.
pub fn run<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    selectors: &[ItemSelector],
) -> Result<CmdResult> {
    let targets = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for target in &targets {
        if store.remove(&target.item.unique_id) {
            result.add_message(CmdMessage::success(format!(
                "Removed ({}): {}",
                target.index,
                describe(&target.item.name, &target.item.platform)
            )));
        }
    }

    Ok(result.with_affected_items(targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::error::ShelfError;
    use crate::model::GameRecord;

    fn filled() -> CollectionStore<crate::store::mem_backend::MemBackend> {
        let mut store = test_utils::mem_store();
        for (id, name) in [(1u64, "Zelda"), (2, "Mario Odyssey"), (3, "Halo 3")] {
            store
                .add(&GameRecord::new(id, name), Some("Nintendo Switch"))
                .unwrap();
        }
        store
    }

    #[test]
    fn preview_does_not_remove() {
        let store = filled();
        let targets = preview(&store, &[ItemSelector::Range(1, 2)]).unwrap();

        assert_eq!(targets.len(), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn removes_selected_items() {
        let mut store = filled();
        let result = run(
            &mut store,
            &[ItemSelector::Index(1), ItemSelector::Index(3)],
        )
        .unwrap();

        assert_eq!(result.affected_items.len(), 2);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(
            result.messages[0].content,
            "Removed (1): Zelda (Nintendo Switch)"
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].name, "Mario Odyssey");
    }

    #[test]
    fn bad_selector_removes_nothing() {
        let mut store = filled();
        let err = run(
            &mut store,
            &[ItemSelector::Index(1), ItemSelector::Index(7)],
        )
        .unwrap_err();

        assert!(matches!(err, ShelfError::ItemNotFound(_)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn removes_by_unique_id() {
        let mut store = filled();
        run(
            &mut store,
            &[ItemSelector::Term("2-Nintendo Switch".into())],
        )
        .unwrap();
        assert!(store.get("2-Nintendo Switch").is_none());
    }
}
