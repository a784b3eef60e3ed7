//! InMemoryRecordStore - RwLock-backed record store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{RecordStore, StoreError};
use crate::record::{Record, RecordId, Stored};

/// Internal stored representation of a record.
struct StoredDocument {
    id: RecordId,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct Collections {
    next_id: u64,
    documents: HashMap<&'static str, Vec<StoredDocument>>,
}

impl Collections {
    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId(self.next_id)
    }
}

/// In-memory record store.
///
/// Each collection is a `Vec` in insertion order. Ids are unique across
/// collections. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<Collections>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the collection of kind `R`.
    pub fn len<R: Record>(&self) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(storage
            .documents
            .get(R::COLLECTION)
            .map(Vec::len)
            .unwrap_or(0))
    }

    fn decode<R: Record>(stored: &StoredDocument) -> Result<Stored<R>, StoreError> {
        Ok(Stored {
            id: stored.id,
            record: serde_json::from_slice(&stored.bytes)?,
        })
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert<R: Record>(&self, record: &R) -> Result<Stored<R>, StoreError> {
        let bytes = serde_json::to_vec(record)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        let id = storage.allocate_id();
        storage
            .documents
            .entry(R::COLLECTION)
            .or_default()
            .push(StoredDocument { id, bytes });

        Ok(Stored {
            id,
            record: record.clone(),
        })
    }

    async fn find_one_by_name<R: Record>(
        &self,
        name: &str,
    ) -> Result<Option<Stored<R>>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_one_by_name"))?;

        let Some(documents) = storage.documents.get(R::COLLECTION) else {
            return Ok(None);
        };

        for stored in documents {
            let found = Self::decode::<R>(stored)?;
            if found.record.name() == name {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }

    async fn find_all<R: Record>(&self) -> Result<Vec<Stored<R>>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_all"))?;

        storage
            .documents
            .get(R::COLLECTION)
            .map(|documents| documents.iter().map(Self::decode::<R>).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn save<R: Record>(
        &self,
        id: Option<RecordId>,
        record: &R,
    ) -> Result<Stored<R>, StoreError> {
        let bytes = serde_json::to_vec(record)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("save"))?;

        let id = match id {
            Some(id) => id,
            None => storage.allocate_id(),
        };
        if id.0 > storage.next_id {
            storage.next_id = id.0;
        }

        let documents = storage.documents.entry(R::COLLECTION).or_default();
        match documents.iter_mut().find(|stored| stored.id == id) {
            Some(existing) => existing.bytes = bytes,
            None => documents.push(StoredDocument { id, bytes }),
        }

        Ok(Stored {
            id,
            record: record.clone(),
        })
    }
}
