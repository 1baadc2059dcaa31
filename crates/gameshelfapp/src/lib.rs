//! # Gameshelf Architecture
//!
//! Gameshelf is a **UI-agnostic collection library** for a video-game shop: a read-only
//! catalog of games, and a personal collection of owned game+platform lines with
//! quantities and prices that persists across runs. The `gameshelf` binary is one client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (gameshelf crate)                                      │
//! │  - Parses arguments, formats output, prompts, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses selectors (indexes, ranges, uniqueIds, names)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection Store (store/)          Catalog (catalog.rs)    │
//! │  - Invariants, totals, flushes      - Read-only lookups     │
//! │  - StorageBackend: Fs / Mem         - Price table           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//! Diagnostics go through the [`log`] facade; the client decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store/collection_store.rs`): invariants and persistence over `MemBackend`.
//! 2. **Commands** (`commands/*.rs`): every branch, over `MemBackend`.
//! 3. **API** (`api.rs`): selector parsing and dispatch.
//! 4. **Integration** (`tests/`): the real filesystem backend in a temp dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The collection store and its storage backends
//! - [`catalog`]: Catalog loading and views
//! - [`pricing`]: Platform price table
//! - [`model`]: Core data types (`GameRecord`, `CollectionItem`, `CollectionStats`)
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration management
//! - [`init`]: Building a filesystem-backed context
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod pricing;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
