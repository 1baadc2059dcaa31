use crate::error::{Result, ShelfError};
use crate::index::{index_items, DisplayItem, ItemSelector};
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;
use std::collections::HashSet;

pub fn indexed_items<B: StorageBackend>(store: &CollectionStore<B>) -> Vec<DisplayItem> {
    index_items(store.items())
}

/// Resolves selectors to items, in selector order, without duplicates.
///
/// Any selector that matches nothing fails the whole resolution.
pub fn resolve_selectors<B: StorageBackend>(
    store: &CollectionStore<B>,
    selectors: &[ItemSelector],
) -> Result<Vec<DisplayItem>> {
    let indexed = indexed_items(store);
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for selector in selectors {
        for found in resolve_one(&indexed, selector)? {
            if seen.insert(found.item.unique_id.clone()) {
                results.push(found.clone());
            }
        }
    }

    Ok(results)
}

/// Like [`resolve_selectors`], for commands that act on exactly one item.
pub fn resolve_single<B: StorageBackend>(
    store: &CollectionStore<B>,
    selector: &ItemSelector,
) -> Result<DisplayItem> {
    let mut found = resolve_selectors(store, std::slice::from_ref(selector))?;
    match found.len() {
        1 => Ok(found.remove(0)),
        n => Err(ShelfError::Api(format!(
            "{} selects {} items, pick a single one",
            selector, n
        ))),
    }
}

fn resolve_one<'a>(
    indexed: &'a [DisplayItem],
    selector: &ItemSelector,
) -> Result<Vec<&'a DisplayItem>> {
    match selector {
        ItemSelector::Index(i) => indexed
            .iter()
            .find(|d| d.index == *i)
            .map(|d| vec![d])
            .ok_or_else(|| ShelfError::ItemNotFound(format!("index {}", i))),
        ItemSelector::Range(start, end) => {
            if *end > indexed.len() {
                return Err(ShelfError::ItemNotFound(format!(
                    "range {}-{} (collection has {} items)",
                    start,
                    end,
                    indexed.len()
                )));
            }
            Ok(indexed
                .iter()
                .filter(|d| d.index >= *start && d.index <= *end)
                .collect())
        }
        ItemSelector::Term(term) => {
            if let Some(exact) = indexed.iter().find(|d| &d.item.unique_id == term) {
                return Ok(vec![exact]);
            }

            let term_lower = term.to_lowercase();
            let matches: Vec<&DisplayItem> = indexed
                .iter()
                .filter(|d| d.item.name.to_lowercase().contains(&term_lower))
                .collect();

            match matches.len() {
                0 => Err(ShelfError::ItemNotFound(format!("\"{}\"", term))),
                1 => Ok(matches),
                n => Err(ShelfError::Api(format!(
                    "\"{}\" matches {} items. Please be more specific, or use an index.",
                    term, n
                ))),
            }
        }
    }
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
            .add(&GameRecord::new(1u64, "Zelda"), Some("Wii U"))
            .unwrap();
        store
            .add(&GameRecord::new(3u64, "Halo 3"), Some("Xbox 360"))
            .unwrap();
        store
    }

    fn ids(items: &[DisplayItem]) -> Vec<&str> {
        items.iter().map(|d| d.item.unique_id.as_str()).collect()
    }

    #[test]
    fn resolves_indexes_and_ranges() {
        let store = filled();
        let found = resolve_selectors(
            &store,
            &[ItemSelector::Index(3), ItemSelector::Range(1, 2)],
        )
        .unwrap();
        assert_eq!(ids(&found), vec!["3-Xbox 360", "1-Nintendo Switch", "1-Wii U"]);
    }

    #[test]
    fn deduplicates_overlapping_selectors() {
        let store = filled();
        let found = resolve_selectors(
            &store,
            &[ItemSelector::Range(1, 2), ItemSelector::Index(2)],
        )
        .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn exact_unique_id_wins_over_name_search() {
        let store = filled();
        let found =
            resolve_selectors(&store, &[ItemSelector::Term("1-Wii U".into())]).unwrap();
        assert_eq!(ids(&found), vec!["1-Wii U"]);
        assert_eq!(found[0].index, 2);
    }

    #[test]
    fn unique_name_match_resolves() {
        let store = filled();
        let found = resolve_selectors(&store, &[ItemSelector::Term("halo".into())]).unwrap();
        assert_eq!(ids(&found), vec!["3-Xbox 360"]);
    }

    #[test]
    fn ambiguous_name_is_an_error() {
        let store = filled();
        let err = resolve_selectors(&store, &[ItemSelector::Term("zelda".into())]).unwrap_err();
        assert!(matches!(err, ShelfError::Api(_)));
    }

    #[test]
    fn missing_targets_are_not_found() {
        let store = filled();
        assert!(matches!(
            resolve_selectors(&store, &[ItemSelector::Index(9)]),
            Err(ShelfError::ItemNotFound(_))
        ));
        assert!(matches!(
            resolve_selectors(&store, &[ItemSelector::Range(2, 5)]),
            Err(ShelfError::ItemNotFound(_))
        ));
        assert!(matches!(
            resolve_selectors(&store, &[ItemSelector::Term("Mario".into())]),
            Err(ShelfError::ItemNotFound(_))
        ));
    }

    #[test]
    fn resolve_single_rejects_ranges_with_many_items() {
        let store = filled();
        assert!(resolve_single(&store, &ItemSelector::Range(1, 2)).is_err());
        let one = resolve_single(&store, &ItemSelector::Range(2, 2)).unwrap();
        assert_eq!(one.item.unique_id, "1-Wii U");
    }
}
