//! The last-added slot: one mutable record per kind, shared by every request.

use tokio::sync::Mutex;

use super::RecordKind;
use crate::record::{RecordId, Stored};
use crate::store::{RecordStore, StoreError};

struct Slot<K> {
    /// `None` until the slot's record has been persisted.
    id: Option<RecordId>,
    record: K,
}

/// Single-owner cell holding the most recently created record of kind `K`.
///
/// Starts out as `K::default()`. Concurrent creates race on `replace`; the
/// slot ends up holding whichever create finished last.
pub struct LastAdded<K> {
    slot: Mutex<Slot<K>>,
}

impl<K: RecordKind> Default for LastAdded<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RecordKind> LastAdded<K> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                id: None,
                record: K::default(),
            }),
        }
    }

    /// Point the slot at a freshly persisted record.
    pub async fn replace(&self, stored: Stored<K>) {
        let mut slot = self.slot.lock().await;
        slot.id = Some(stored.id);
        slot.record = stored.record;
    }

    pub async fn name(&self) -> String {
        self.slot.lock().await.record.name().to_string()
    }

    /// A copy of the current record and its id, if it has one.
    pub async fn get(&self) -> (Option<RecordId>, K) {
        let slot = self.slot.lock().await;
        (slot.id, slot.record.clone())
    }

    /// Apply `mutate` to a copy of the slot's record and save it.
    ///
    /// The slot is locked for the whole call, so mutations never interleave.
    /// It only changes once the store has acknowledged the save; a record
    /// that was never persisted is inserted.
    pub async fn update<S, F>(&self, store: &S, mutate: F) -> Result<K, StoreError>
    where
        S: RecordStore,
        F: FnOnce(&mut K) + Send,
    {
        let mut slot = self.slot.lock().await;
        let mut record = slot.record.clone();
        mutate(&mut record);

        let saved = store.save(slot.id, &record).await?;
        slot.id = Some(saved.id);
        slot.record = saved.record.clone();
        Ok(saved.record)
    }
}
