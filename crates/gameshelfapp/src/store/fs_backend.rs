use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one `<key>.json` file per key under a data directory.
pub struct FsBackend {
    root: PathBuf,
}

const FILE_EXT: &str = ".json";

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys become file names; anything that could escape the data dir is replaced.
    fn key_filename(&self, key: &str) -> String {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}{}", safe, FILE_EXT)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.location(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ShelfError::Io(e)),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.location(key);

        // Atomic write
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", self.key_filename(key), Uuid::new_v4()));
        fs::write(&tmp, blob).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.location(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ShelfError::Io(e)),
        }
    }

    fn location(&self, key: &str) -> PathBuf {
        self.root.join(self.key_filename(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_filename_is_sanitized() {
        let backend = FsBackend::new(PathBuf::from("/data"));
        assert_eq!(backend.key_filename("gameCollection"), "gameCollection.json");
        assert_eq!(backend.key_filename("../etc/passwd"), "___etc_passwd.json");
    }

    #[test]
    fn test_location_is_under_root() {
        let backend = FsBackend::new(PathBuf::from("/data"));
        assert_eq!(
            backend.location("k"),
            PathBuf::from("/data").join("k.json")
        );
    }
}
