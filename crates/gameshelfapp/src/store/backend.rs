use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while CollectionStore handles the "what" (items, invariants, when to flush).
pub trait StorageBackend {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, key: &str, blob: &str) -> Result<()>;

    /// Remove `key` entirely. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// Where the blob for `key` lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}
