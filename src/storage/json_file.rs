//! File-backed storage
//!
//! The whole file is one JSON object mapping keys to string values, e.g.
//! `{"profiles": "[{\"id\":\"1\", ...}]"}`. Writes go through a temp file in
//! the same directory that is then renamed over the target.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::{KeyValueStore, StorageError};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry. A missing or blank file holds no keys.
    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let io_err = |source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        };

        fs::create_dir_all(dir).map_err(io_err)?;

        let content = serde_json::to_string_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        let tmp_path = tmp.path().to_path_buf();
        write_contents(tmp.as_file_mut(), &tmp_path, &content)?;

        tmp.persist(&self.path)
            .map_err(|e| StorageError::Persist {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

/// Write `content` to `writer`, blaming `path` on failure
fn write_contents<W: Write>(writer: &mut W, path: &Path, content: &str) -> Result<(), StorageError> {
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        // Re-read so keys written by others since the last call survive
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries)?;

        tracing::debug!(path = %self.path.display(), key, "wrote storage file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_has_no_keys() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));

        assert_eq!(store.get("profiles").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("storage.json"));

        store.set("profiles", "[]".to_string()).unwrap();
        assert_eq!(store.get("profiles").unwrap().as_deref(), Some("[]"));

        // A fresh handle sees the same data
        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.get("profiles").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("storage.json");
        let mut store = JsonFileStore::new(&path);

        store.set("k", "v".to_string()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("profiles", "[]".to_string()).unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("profiles").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_blank_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "\n").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("profiles").unwrap(), None);
    }

    /// Writer that rejects every write
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_names_temp_file() {
        let tmp_path = Path::new("/data/.tmpA1b2C3");
        let err = write_contents(&mut FullDisk, tmp_path, "{}").unwrap_err();

        match err {
            StorageError::Io { path, .. } => assert_eq!(path, tmp_path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.get("profiles").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
