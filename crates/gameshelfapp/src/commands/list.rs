use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;

use super::helpers::indexed_items;

/// Narrows a collection listing. Empty criteria list everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    /// Exact platform name.
    pub platform: Option<String>,
    /// Case-insensitive substring of the item name.
    pub search: Option<String>,
}

pub fn run<B: StorageBackend>(store: &CollectionStore<B>, filter: ItemFilter) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::info("Your collection is empty"));
        return Ok(result);
    }

    let term = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let listed: Vec<_> = indexed_items(store)
        .into_iter()
        .filter(|d| {
            filter
                .platform
                .as_deref()
                .map_or(true, |p| d.item.platform == p)
        })
        .filter(|d| {
            term.as_deref()
                .map_or(true, |t| d.item.name.to_lowercase().contains(t))
        })
        .collect();

    if listed.is_empty() {
        result.add_message(CmdMessage::info("No items match"));
    }

    Ok(result.with_listed_items(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::model::GameRecord;

    fn filled() -> CollectionStore<crate::store::mem_backend::MemBackend> {
        let mut store = test_utils::mem_store();
        store
            .add(&GameRecord::new(1u64, "Zelda"), Some("Nintendo Switch"))
            .unwrap();
        store
            .add(&GameRecord::new(2u64, "Mario Odyssey"), Some("Nintendo Switch"))
            .unwrap();
        store
            .add(&GameRecord::new(3u64, "Halo 3"), Some("Xbox 360"))
            .unwrap();
        store
    }

    #[test]
    fn lists_everything_in_insertion_order() {
        let store = filled();
        let result = run(&store, ItemFilter::default()).unwrap();

        let names: Vec<&str> = result
            .listed_items
            .iter()
            .map(|d| d.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zelda", "Mario Odyssey", "Halo 3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filtering_keeps_canonical_indexes() {
        let store = filled();
        let result = run(
            &store,
            ItemFilter {
                platform: Some("Xbox 360".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].index, 3);
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = filled();
        let result = run(
            &store,
            ItemFilter {
                search: Some("MARIO".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.unique_id, "2-Nintendo Switch");
    }

    #[test]
    fn empty_collection_reports_it() {
        let store = test_utils::mem_store();
        let result = run(&store, ItemFilter::default()).unwrap();

        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages[0].content, "Your collection is empty");
    }

    #[test]
    fn no_match_reports_it() {
        let store = filled();
        let result = run(
            &store,
            ItemFilter {
                platform: Some("PC".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages[0].content, "No items match");
    }
}
