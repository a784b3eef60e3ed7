//! Record service - the core of the crate.
//!
//! `RecordService<K, S>` checks caller input, delegates persistence to a
//! `RecordStore` and keeps a last-added slot for its kind. Kind-specific
//! behaviour (required fields, name composition, defaults) comes from the
//! `RecordKind` impls on [`Cat`](crate::Cat) and [`Dog`](crate::Dog).
//!
//! ## Quick Start
//!
//! ```ignore
//! use pet_records::{Dog, Fields, InMemoryRecordStore, RecordService};
//!
//! let dogs = RecordService::<Dog, _>::new(InMemoryRecordStore::new());
//! dogs.create(&Fields::new().with("name", "Rex").with("breed", "mutt").with("age", "2")).await?;
//!
//! let rex = dogs.find_by_name(Some("Rex")).await?.unwrap();
//! assert_eq!(rex.age, 3); // lookups report the dog one year older
//! ```

mod error;
mod kind;
mod last_added;
mod record_service;

pub use error::ServiceError;
pub use kind::{parse_count, required, RecordKind};
pub use last_added::LastAdded;
pub use record_service::RecordService;
