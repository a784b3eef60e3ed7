//! Records - named documents persisted one collection per kind.
//!
//! A record is a plain serde struct with a display name. The `Record`
//! derive fills in the collection name and the name accessor:
//!
//! ```ignore
//! use pet_records::Record;
//!
//! #[derive(Clone, Default, Serialize, Deserialize, Record)]
//! #[record(collection = "cats")]
//! pub struct Cat {
//!     pub name: String,
//!     #[serde(rename = "bedsOwned")]
//!     pub beds_owned: u32,
//! }
//! ```

mod cat;
mod dog;
mod fields;

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use cat::Cat;
pub use dog::Dog;
pub use fields::Fields;

/// Trait for types that can be stored as records.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The collection name for this record kind (e.g. "cats", "dogs").
    /// Maps to a collection in MongoDB, a `collection` column in SQLite, etc.
    const COLLECTION: &'static str;

    /// Returns the display name of this record.
    fn name(&self) -> &str;
}

/// Store-assigned document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<R> {
    pub id: RecordId,
    pub record: R,
}

impl<R> Stored<R> {
    pub fn into_record(self) -> R {
        self.record
    }
}
