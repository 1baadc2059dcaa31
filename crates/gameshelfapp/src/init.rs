//! # Context Setup
//!
//! [`initialize`] wires a ready-to-use [`ShelfApi`] over the filesystem: it picks the data
//! directory, loads configuration, loads the catalog and hydrates the collection.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data` flag), used as-is.
//! 2. The `GAMESHELF_DATA` environment variable (primarily for testing).
//! 3. The OS-appropriate data directory via the `directories` crate.
//!
//! The directory is created lazily on the first write, so read-only commands never touch
//! the disk.
//!
//! ## Catalog Resolution
//!
//! The `catalog` config key, if set, points at a JSON catalog. Relative paths are resolved
//! against the data directory. Otherwise the bundled catalog is used.

use crate::api::{ShelfApi, ShelfPaths};
use crate::catalog::Catalog;
use crate::config::{ShelfConfig, CONFIG_FILE_NAME};
use crate::error::{Result, ShelfError};
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::CollectionStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "GAMESHELF_DATA";

pub struct ShelfContext {
    pub api: ShelfApi<FsBackend>,
    pub config: ShelfConfig,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "gameshelf", "gameshelf")
}

/// Picks the data directory; see the module docs for the order.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine a data directory".to_string()))
}

/// Config files in priority order: the data dir's first, then the user's.
pub fn config_files(data_dir: &Path) -> Vec<PathBuf> {
    let mut files = vec![data_dir.join(CONFIG_FILE_NAME)];
    if let Some(dirs) = project_dirs() {
        let user_file = dirs.config_dir().join(CONFIG_FILE_NAME);
        if !files.contains(&user_file) {
            files.push(user_file);
        }
    }
    files
}

pub fn load_catalog(config: &ShelfConfig, data_dir: &Path) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => {
            let path = if path.is_relative() {
                data_dir.join(path)
            } else {
                path.clone()
            };
            log::debug!("Loading catalog from {}", path.display());
            Catalog::from_path(&path).map_err(|e| {
                ShelfError::Config(format!("Could not load catalog {}: {}", path.display(), e))
            })
        }
        None => Catalog::bundled(),
    }
}

/// Initialize the gameshelf context: data dir, config, catalog and a hydrated store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let files = config_files(&data_dir);
    let config = ShelfConfig::load_from(&files)?;
    log::debug!("Using data directory {}", data_dir.display());

    let catalog = load_catalog(&config, &data_dir)?;
    let backend = FsBackend::new(data_dir.clone());
    let paths = ShelfPaths {
        collection_file: backend.location(&config.storage_key),
        data_dir,
        config_files: files,
    };

    let store = CollectionStore::with_backend(backend)
        .with_key(config.storage_key.clone())
        .with_prices(config.price_table());
    let api = ShelfApi::new(store, catalog, paths);

    Ok(ShelfContext { api, config })
}
