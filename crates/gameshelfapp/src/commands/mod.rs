//! # Command Layer
//!
//! This module contains the **core business logic** of gameshelf. Each command lives in its
//! own submodule and implements plain functions over the collection store and the catalog.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Resolve user selectors into collection items
//! - Drive the [`CollectionStore`](crate::store::CollectionStore) mutations
//! - Return structured [`CmdResult`] values with affected items and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **User interaction**: destructive commands expose a `preview()` so the UI can confirm
//!   before calling `run()`
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_items`: items that were modified, with their display index
//! - `listed_items`: items to display, with their canonical display index
//! - `catalog_games`, `platforms`, `genres`: catalog views
//! - `stats`: collection aggregates
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! Command tests use [`MemBackend`](crate::store::mem_backend::MemBackend) and the small
//! catalog from [`crate::test_utils`], so every branch runs without touching the filesystem.
//!
//! ## Command Modules
//!
//! - [`add`]: add a catalog game to the collection
//! - [`list`]: list collection items
//! - [`remove`]: remove items (with preview)
//! - [`quantity`]: set / increment / decrement quantities
//! - [`clear`]: empty the collection (with preview)
//! - [`stats`]: collection aggregates
//! - [`catalog`]: catalog views annotated with ownership
//! - [`helpers`]: selector resolution

use crate::catalog::PlatformSummary;
use crate::index::DisplayItem;
use crate::model::CollectionStats;
use serde::Serialize;

pub mod add;
pub mod catalog;
pub mod clear;
pub mod helpers;
pub mod list;
pub mod quantity;
pub mod remove;
pub mod stats;

pub use catalog::CatalogRow;
pub use list::ItemFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_items: Vec<DisplayItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_items: Vec<DisplayItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub catalog_games: Vec<CatalogRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<PlatformSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CollectionStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }
}

/// How an item is named in user-facing messages.
pub(crate) fn describe(name: &str, platform: &str) -> String {
    format!("{} ({})", name, platform)
}
