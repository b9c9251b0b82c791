use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::errors::PersistenceError;

use super::kv::KvStore;

/// Key-value store backed by one JSON text file per key under a data
/// directory. A missing file reads as an absent key.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(PersistenceError::Write)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Read(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::write(self.key_path(key), value).map_err(PersistenceError::Write)
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Write(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert_eq!(store.get("qrGallery").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.set("qrGallery", "[]").unwrap();
        assert_eq!(store.get("qrGallery").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.set("qrGallery", "[]").unwrap();
        store.remove("qrGallery").unwrap();
        store.remove("qrGallery").unwrap();
        assert_eq!(store.get("qrGallery").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_store_over_the_same_dir() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::new(dir.path()).unwrap();
            store.set("qrGallery", "[1]").unwrap();
        }
        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(reopened.get("qrGallery").unwrap().as_deref(), Some("[1]"));
    }
}
