use serde::{Deserialize, Serialize};

use crate::service::{parse_count, required, RecordKind, ServiceError};
use crate::Record;

use super::Fields;

/// A cat. Its name is composed from a first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "cats")]
pub struct Cat {
    pub name: String,
    #[serde(rename = "bedsOwned")]
    pub beds_owned: u32,
}

impl Default for Cat {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            beds_owned: 0,
        }
    }
}

impl RecordKind for Cat {
    const KIND: &'static str = "Cat";
    const REQUIRED_FIELDS: &'static [&'static str] = &["firstname", "lastname", "beds"];

    fn from_fields(fields: &Fields) -> Result<Self, ServiceError> {
        let firstname = required(fields, "firstname")?;
        let lastname = required(fields, "lastname")?;
        Ok(Self {
            name: format!("{} {}", firstname, lastname),
            beds_owned: parse_count(fields, "beds")?,
        })
    }
}
