//! RecordService - validation, persistence and last-added tracking for one kind.

use tracing::{debug, warn};

use super::kind::missing_fields_message;
use super::{LastAdded, RecordKind, ServiceError};
use crate::record::{Cat, Fields};
use crate::store::{RecordStore, StoreError};

/// Record service for kind `K`, backed by store `S`.
///
/// ## Example
///
/// ```ignore
/// use pet_records::{Cat, Fields, InMemoryRecordStore, RecordService};
///
/// let cats = RecordService::<Cat, _>::new(InMemoryRecordStore::new());
/// let fields = Fields::new()
///     .with("firstname", "Jane")
///     .with("lastname", "Doe")
///     .with("beds", "3");
/// assert_eq!(cats.create(&fields).await?, "Jane Doe");
/// assert_eq!(cats.last_added_name().await, "Jane Doe");
/// ```
pub struct RecordService<K, S> {
    store: S,
    last_added: LastAdded<K>,
}

fn persistence<K: RecordKind>(operation: &'static str) -> impl FnOnce(StoreError) -> ServiceError {
    move |err| {
        warn!(kind = K::KIND, operation, error = %err, "record store failed");
        ServiceError::Persistence(err)
    }
}

impl<K: RecordKind, S: RecordStore> RecordService<K, S> {
    /// Create a service with a fresh last-added slot.
    pub fn new(store: S) -> Self {
        Self {
            store,
            last_added: LastAdded::new(),
        }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate `fields`, persist the new record and make it the last added.
    ///
    /// Returns the record's display name. The store is not touched when a
    /// required field is missing.
    pub async fn create(&self, fields: &Fields) -> Result<String, ServiceError> {
        let missing = fields.missing(K::REQUIRED_FIELDS);
        if !missing.is_empty() {
            debug!(kind = K::KIND, ?missing, "create rejected");
            return Err(ServiceError::Validation(missing_fields_message(
                K::REQUIRED_FIELDS,
                &missing,
            )));
        }

        let record = K::from_fields(fields)?;
        let stored = self
            .store
            .insert(&record)
            .await
            .map_err(persistence::<K>("insert"))?;

        let name = stored.record.name().to_string();
        debug!(kind = K::KIND, id = %stored.id, name = %name, "record created");
        self.last_added.replace(stored).await;
        Ok(name)
    }

    /// Look up one record by exact name. `Ok(None)` when nothing matches.
    pub async fn find_by_name(&self, name: Option<&str>) -> Result<Option<K>, ServiceError> {
        let name = name.filter(|n| !n.is_empty()).ok_or_else(|| {
            ServiceError::Validation("Name is required to perform a search".to_string())
        })?;

        let found = self
            .store
            .find_one_by_name::<K>(name)
            .await
            .map_err(persistence::<K>("find_one_by_name"))?;

        debug!(kind = K::KIND, name, found = found.is_some(), "lookup by name");
        Ok(found.map(|stored| {
            let mut record = stored.into_record();
            record.on_lookup();
            record
        }))
    }

    /// Every record of this kind, in store order.
    pub async fn list_all(&self) -> Result<Vec<K>, ServiceError> {
        let all = self
            .store
            .find_all::<K>()
            .await
            .map_err(persistence::<K>("find_all"))?;
        Ok(all.into_iter().map(|stored| stored.into_record()).collect())
    }

    /// Name of the last added record, `"unknown"` before the first create.
    pub async fn last_added_name(&self) -> String {
        self.last_added.name().await
    }

    /// The last added record itself.
    pub async fn last_added(&self) -> K {
        self.last_added.get().await.1
    }
}

impl<S: RecordStore> RecordService<Cat, S> {
    /// Give the last added cat one more bed and persist it.
    pub async fn mutate_last_added(&self) -> Result<Cat, ServiceError> {
        let cat = self
            .last_added
            .update(&self.store, |cat| {
                cat.beds_owned = cat.beds_owned.saturating_add(1);
            })
            .await
            .map_err(persistence::<Cat>("save"))?;

        debug!(name = %cat.name, beds = cat.beds_owned, "last added cat updated");
        Ok(cat)
    }
}
