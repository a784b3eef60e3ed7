//! pet_records - Cat and Dog records behind a small HTTP API.
//!
//! The core is [`RecordService`]: it checks that required fields are
//! present, persists records through a [`RecordStore`], and remembers the
//! last record created per kind. The `http` feature adds an axum adapter
//! and the `pet-records` server binary.
//!
//! ## Example
//!
//! ```ignore
//! use pet_records::{Cat, Fields, InMemoryRecordStore, RecordService};
//!
//! let cats = RecordService::<Cat, _>::new(InMemoryRecordStore::new());
//! let name = cats
//!     .create(&Fields::new().with("firstname", "Jane").with("lastname", "Doe").with("beds", "3"))
//!     .await?;
//! assert_eq!(name, "Jane Doe");
//!
//! let updated = cats.mutate_last_added().await?;
//! assert_eq!(updated.beds_owned, 4);
//! ```

// Lets `#[derive(Record)]` expand to `pet_records::Record` inside this crate.
extern crate self as pet_records;

pub mod config;
mod record;
mod service;
mod store;

#[cfg(feature = "http")]
pub mod http;

pub use record::{Cat, Dog, Fields, Record, RecordId, Stored};
pub use service::{parse_count, required, LastAdded, RecordKind, RecordService, ServiceError};
pub use store::{InMemoryRecordStore, RecordStore, SqliteRecordStore, StoreError};

// Derive macro for `Record`, see `pet_records_macros`.
pub use pet_records_macros::Record;
