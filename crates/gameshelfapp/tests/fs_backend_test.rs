use gameshelfapp::store::backend::StorageBackend;
use gameshelfapp::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_blob_io() {
    let (_dir, backend) = setup();

    // 1. Nothing stored yet
    assert_eq!(backend.load("gameCollection").unwrap(), None);

    // 2. Write then read
    backend.save("gameCollection", "[]").unwrap();
    assert_eq!(
        backend.load("gameCollection").unwrap(),
        Some("[]".to_string())
    );

    // 3. Overwrite
    backend.save("gameCollection", "[1]").unwrap();
    assert_eq!(
        backend.load("gameCollection").unwrap(),
        Some("[1]".to_string())
    );

    // 4. Delete, twice
    backend.delete("gameCollection").unwrap();
    backend.delete("gameCollection").unwrap();
    assert_eq!(backend.load("gameCollection").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.save("gameCollection", "Atomic").unwrap();

    let expected_path = dir.path().join("gameCollection.json");
    assert!(expected_path.exists());
    assert_eq!(backend.location("gameCollection"), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "Atomic");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.save("gameCollection", "[]").unwrap();
    assert!(root.join("gameCollection.json").exists());
    assert_eq!(backend.root(), root.as_path());
}

#[test]
fn test_fs_backend_keys_are_isolated() {
    let (_dir, backend) = setup();

    backend.save("a", "first").unwrap();
    backend.save("b", "second").unwrap();
    backend.delete("a").unwrap();

    assert_eq!(backend.load("a").unwrap(), None);
    assert_eq!(backend.load("b").unwrap(), Some("second".to_string()));
}
