//! Quantity changes on a single item.
//!
//! Quantities never drop below 1 through [`decrement`]; only [`set`] with zero or less
//! removes an item.

use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayItem, ItemSelector};
use crate::store::backend::StorageBackend;
use crate::store::CollectionStore;

use super::helpers::resolve_single;

fn refreshed<B: StorageBackend>(store: &CollectionStore<B>, target: DisplayItem) -> DisplayItem {
    match store.get(&target.item.unique_id) {
        Some(item) => DisplayItem {
            index: target.index,
            item: item.clone(),
        },
        None => target,
    }
}

pub fn set<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    selector: &ItemSelector,
    quantity: i64,
) -> Result<CmdResult> {
    let target = resolve_single(store, selector)?;
    let label = describe(&target.item.name, &target.item.platform);
    store.set_quantity(&target.item.unique_id, quantity);

    let target = refreshed(store, target);
    let mut result = CmdResult::default();
    if quantity <= 0 {
        result.add_message(CmdMessage::success(format!("Removed {}", label)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{} quantity set to {}",
            label, target.item.quantity
        )));
    }
    Ok(result.with_affected_items(vec![target]))
}

pub fn increment<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    selector: &ItemSelector,
) -> Result<CmdResult> {
    let target = resolve_single(store, selector)?;
    store.increment(&target.item.unique_id);

    let target = refreshed(store, target);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} quantity is now {}",
        describe(&target.item.name, &target.item.platform),
        target.item.quantity
    )));
    Ok(result.with_affected_items(vec![target]))
}

pub fn decrement<B: StorageBackend>(
    store: &mut CollectionStore<B>,
    selector: &ItemSelector,
) -> Result<CmdResult> {
    let target = resolve_single(store, selector)?;
    let changed = store.decrement(&target.item.unique_id);

    let target = refreshed(store, target);
    let label = describe(&target.item.name, &target.item.platform);
    let mut result = CmdResult::default();
    if changed {
        result.add_message(CmdMessage::success(format!(
            "{} quantity is now {}",
            label, target.item.quantity
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} is already at the minimum quantity of 1. Use remove to drop it.",
            label
        )));
    }
    Ok(result.with_affected_items(vec![target]))
}
