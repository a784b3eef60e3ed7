//! Record stores - the persistence boundary for records.
//!
//! A `RecordStore` keeps one collection per record kind and exposes the
//! four operations the service needs: insert, find-one-by-name, find-all
//! and save. Two implementations ship with the crate:
//!
//! - [`InMemoryRecordStore`] - `Arc<RwLock<..>>` backed, for tests and
//!   development.
//! - [`SqliteRecordStore`] - JSON documents in a single SQLite table.
//!
//! ## Example
//!
//! ```ignore
//! use pet_records::{Cat, InMemoryRecordStore, RecordStore};
//!
//! let store = InMemoryRecordStore::new();
//! let stored = store.insert(&Cat::default()).await?;
//! let found = store.find_one_by_name::<Cat>("unknown").await?;
//! ```

mod error;
mod in_memory;
mod sqlite;

use async_trait::async_trait;

use crate::record::{Record, RecordId, Stored};

pub use error::StoreError;
pub use in_memory::InMemoryRecordStore;
pub use sqlite::SqliteRecordStore;

/// Abstract document storage for records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record and return it with its assigned id.
    async fn insert<R: Record>(&self, record: &R) -> Result<Stored<R>, StoreError>;

    /// Find the first record of kind `R` whose name matches exactly.
    /// Returns `None` when nothing matches.
    async fn find_one_by_name<R: Record>(&self, name: &str)
        -> Result<Option<Stored<R>>, StoreError>;

    /// All records of kind `R`, in insertion order.
    async fn find_all<R: Record>(&self) -> Result<Vec<Stored<R>>, StoreError>;

    /// Upsert by id. With `None` the record is inserted under a new id.
    async fn save<R: Record>(
        &self,
        id: Option<RecordId>,
        record: &R,
    ) -> Result<Stored<R>, StoreError>;
}
