//! # Item Identifiers: uniqueId vs Display Index
//!
//! Collection items are keyed by their `uniqueId` (`"{gameId}-{platform}"`, e.g.
//! `"1-Nintendo Switch"`). That is the correct technical key, but it contains spaces and is
//! tedious to type, so the CLI also numbers items.
//!
//! ## Display Index
//!
//! The display index is the item's 1-based position in the **full** collection, in
//! insertion order. Filtering a listing never renumbers it: if `gameshelf ls --platform PC`
//! shows item `3`, then `gameshelf rm 3` removes that same item.
//!
//! Removing an item shifts everything after it down by one. That is fine for a CLI where
//! every command re-lists, and it matches what users see on screen.
//!
//! ## Selector Grammar
//!
//! - **Index**: `N` (e.g. `1`, `12`)
//! - **Range**: `A-B` where both ends are indexes (e.g. `2-4`), inclusive, `A <= B`
//! - **Term**: anything else. Resolved as an exact `uniqueId` first, then as a
//!   case-insensitive name match that must hit exactly one item.
//!
//! ## Implementation
//!
//! - [`index_items`]: pairs items with their display index
//! - [`parse_selector`]: parses one user token
//! - Resolution against a store lives in [`crate::commands::helpers`]

use crate::model::CollectionItem;
use serde::Serialize;
use std::fmt;

/// A user input selecting one or more collection items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemSelector {
    Index(usize),
    Range(usize, usize),
    Term(String),
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Index(i) => write!(f, "{}", i),
            ItemSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            ItemSelector::Term(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// A collection item paired with its canonical display index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub index: usize,
    #[serde(flatten)]
    pub item: CollectionItem,
}

/// Assigns display indexes (1-based, insertion order).
///
/// Always index the full collection before filtering, or indexes drift between views.
pub fn index_items(items: &[CollectionItem]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(pos, item)| DisplayItem {
            index: pos + 1,
            item: item.clone(),
        })
        .collect()
}

fn parse_index(s: &str) -> Option<std::result::Result<usize, String>> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(match s.parse::<usize>() {
        Ok(0) => Err("Indexes start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("Invalid index {}: {}", s, e)),
    })
}

/// Parses a single selector token.
///
/// Returns `Err` only for inputs that look like indexes but are invalid (`0`, `5-3`).
pub fn parse_selector(s: &str) -> std::result::Result<ItemSelector, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty selector".to_string());
    }

    if let Some(index) = parse_index(s) {
        return index.map(ItemSelector::Index);
    }

    if let Some((start, end)) = s.split_once('-') {
        if let (Some(start), Some(end)) = (parse_index(start), parse_index(end)) {
            let (start, end) = (start?, end?);
            if start > end {
                return Err(format!("Invalid range: {} is after {}", start, end));
            }
            return Ok(ItemSelector::Range(start, end));
        }
    }

    Ok(ItemSelector::Term(s.to_string()))
}
