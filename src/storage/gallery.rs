use std::sync::{Mutex, PoisonError};

use crate::errors::PersistenceError;
use crate::models::gallery::GalleryRecord;

use super::kv::KvStore;

/// Key the gallery array is persisted under.
pub const GALLERY_KEY: &str = "qrGallery";

/// Oldest records are dropped once the gallery holds this many.
pub const GALLERY_CAPACITY: usize = 50;

/// Newest-first collection of saved QR codes, persisted through an injected
/// `KvStore` as a single JSON array.
///
/// Every mutation is a read-modify-write cycle over the persisted array,
/// serialized behind a mutex so concurrent handlers cannot interleave. The
/// store never filters on read; searching is a caller-side concern.
pub struct GalleryStore {
    store: Box<dyn KvStore>,
    lock: Mutex<()>,
}

impl GalleryStore {
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Read the persisted records. An absent key or unparsable state reads
    /// as an empty gallery, never as an error.
    pub fn load(&self) -> Vec<GalleryRecord> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_records()
    }

    /// Current records, newest first.
    pub fn list(&self) -> Vec<GalleryRecord> {
        self.load()
    }

    /// Prepend a record, dropping the oldest once the capacity is exceeded.
    pub fn insert(&self, record: GalleryRecord) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.read_records();
        records.insert(0, record);
        records.truncate(GALLERY_CAPACITY);
        self.persist(&records)
    }

    /// Remove the record with the given id. Unknown ids are a no-op, not an
    /// error.
    pub fn remove(&self, id: &str) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.read_records();
        if let Some(position) = records.iter().position(|record| record.id == id) {
            records.remove(position);
        }
        self.persist(&records)
    }

    /// Drop every record by deleting the persisted key.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.store.remove(GALLERY_KEY)
    }

    /// Confirm the backing store answers reads.
    pub fn ping(&self) -> Result<(), PersistenceError> {
        self.store.get(GALLERY_KEY).map(|_| ())
    }

    fn read_records(&self) -> Vec<GalleryRecord> {
        let raw = match self.store.get(GALLERY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read gallery state: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                // Corrupt persisted state is treated as "no gallery"
                log::warn!("Discarding unparsable gallery state: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, records: &[GalleryRecord]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(records)?;
        self.store.set(GALLERY_KEY, &raw)
    }
}
