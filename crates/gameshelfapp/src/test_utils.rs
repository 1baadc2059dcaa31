use crate::catalog::Catalog;
use crate::model::GameRecord;
use crate::store::mem_backend::MemBackend;
use crate::store::CollectionStore;

/// A hydrated, empty store over memory with the built-in price table.
pub fn mem_store() -> CollectionStore<MemBackend> {
    let mut store = CollectionStore::with_backend(MemBackend::new());
    store.hydrate();
    store
}

/// Four games: one on two platforms, two single-platform, one on an unpriced platform.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        GameRecord {
            genre: Some("Adventure".into()),
            ..GameRecord::new(1u64, "Zelda").with_platforms(["Nintendo Switch", "Wii U"])
        },
        GameRecord {
            genre: Some("Platformer".into()),
            ..GameRecord::new(2u64, "Mario Odyssey").with_platforms(["Nintendo Switch"])
        },
        GameRecord {
            genre: Some("Shooter".into()),
            ..GameRecord::new(3u64, "Halo 3").with_platforms(["Xbox 360"])
        },
        GameRecord::new(4u64, "Pitfall!").with_platforms(["Atari 2600"]),
    ])
}
