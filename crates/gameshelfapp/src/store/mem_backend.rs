use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since gameshelf is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    blobs: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
    deletes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `blob` already stored under `key`, as if written by an earlier run.
    pub fn with_blob(key: &str, blob: &str) -> Self {
        let backend = Self::default();
        backend
            .blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful saves so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    /// Number of delete calls so far.
    pub fn delete_count(&self) -> usize {
        *self.deletes.borrow()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.borrow().contains_key(key)
    }
}

impl StorageBackend for MemBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.blobs.borrow_mut().remove(key);
        *self.deletes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
