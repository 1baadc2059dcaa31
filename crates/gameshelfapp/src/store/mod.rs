//! # Storage Layer
//!
//! Gameshelf keeps the whole collection as one JSON array stored under a single key
//! (`gameCollection` by default). The split is:
//!
//! 1. **Backend** ([`backend::StorageBackend`]): raw blob I/O by key. Knows nothing about games.
//! 2. **Store** ([`collection_store::CollectionStore`]): the in-memory collection, its
//!    invariants, and when to write.
//!
//! ## Lifecycle
//!
//! - **Hydrate**: at startup, once. A missing or malformed blob means an empty collection;
//!   the error is logged and swallowed.
//! - **Mutate**: every add / remove / quantity change rewrites the full blob before the
//!   call returns, so writes land in call order and the last one wins.
//! - **Clear**: removes the key instead of writing an empty array.
//!
//! ## Invariants
//!
//! - No two items share a `uniqueId` (`"{gameId}-{platform}"`).
//! - Every item has `quantity >= 1`. Setting a quantity of zero or less removes the item.
//! - An item's `price` is frozen at add time.
//!
//! A persisted blob that breaks either of the first two is rejected whole at hydrate time.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, written atomically.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── gameCollection.json   # The collection blob
//! └── gameshelf.toml        # Optional configuration
//! ```

pub mod backend;
pub mod collection_store;
pub mod fs_backend;
pub mod mem_backend;

pub use collection_store::{CollectionStore, DEFAULT_STORAGE_KEY};
