use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;

/// What a clear would drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearPreview {
    /// Distinct game+platform lines.
    pub items: usize,
    /// Sum of quantities.
    pub copies: u64,
}

pub fn preview<B: StorageBackend>(store: &CollectionStore<B>) -> ClearPreview {
    ClearPreview {
        items: store.len(),
        copies: store.total_items(),
    }
}

/// Empties the collection and removes the persisted blob. Does NOT prompt.
pub fn run<B: StorageBackend>(store: &mut CollectionStore<B>) -> Result<CmdResult> {
    let before = preview(store);
    store.clear();

    let mut result = CmdResult::default();
    if before.items == 0 {
        result.add_message(CmdMessage::info("Your collection was already empty"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Cleared {} item(s) ({} copies) from your collection",
            before.items, before.copies
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::model::GameRecord;

    #[test]
    fn clears_everything() {
        let mut store = test_utils::mem_store();
        store.add(&GameRecord::new(1u64, "a"), Some("PC")).unwrap();
        store.add(&GameRecord::new(2u64, "b"), Some("PC")).unwrap();
        store.increment("2-PC");

        assert_eq!(preview(&store), ClearPreview { items: 2, copies: 3 });

        let result = run(&mut store).unwrap();
        assert!(store.is_empty());
        assert!(!store.backend().contains(store.key()));
        assert_eq!(
            result.messages[0].content,
            "Cleared 2 item(s) (3 copies) from your collection"
        );
    }

    #[test]
    fn clearing_empty_collection_is_informational() {
        let mut store = test_utils::mem_store();
        let result = run(&mut store).unwrap();
        assert_eq!(result.messages[0].content, "Your collection was already empty");
    }
}
