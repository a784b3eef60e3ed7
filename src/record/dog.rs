use serde::{Deserialize, Serialize};

use crate::service::{parse_count, required, RecordKind, ServiceError};
use crate::Record;

use super::Fields;

/// A dog. Its name is used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "dogs")]
pub struct Dog {
    pub name: String,
    pub breed: String,
    pub age: u32,
}

impl Default for Dog {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            breed: "mutt".to_string(),
            age: 0,
        }
    }
}

impl RecordKind for Dog {
    const KIND: &'static str = "Dog";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "breed", "age"];

    fn from_fields(fields: &Fields) -> Result<Self, ServiceError> {
        Ok(Self {
            name: required(fields, "name")?.to_string(),
            breed: required(fields, "breed")?.to_string(),
            age: parse_count(fields, "age")?,
        })
    }

    /// Legacy behaviour: a dog found by name is reported one year older.
    /// Only the returned copy changes; nothing is written back.
    fn on_lookup(&mut self) {
        self.age = self.age.saturating_add(1);
    }
}
