//! Per-kind configuration: required fields, construction, lookup hook.

use super::ServiceError;
use crate::record::{Fields, Record};

/// Everything that differs between record kinds.
///
/// `Default` is the placeholder held by the last-added slot before any
/// record of the kind has been created.
pub trait RecordKind: Record + Default {
    /// Human-readable kind name ("Cat", "Dog").
    const KIND: &'static str;

    /// Fields `create` requires, all present and non-empty.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Build a record from fields whose presence has already been checked.
    fn from_fields(fields: &Fields) -> Result<Self, ServiceError>;

    /// Applied to a record found by name before it is returned.
    fn on_lookup(&mut self) {}
}

/// A required field's value, or a validation error naming it.
pub fn required<'a>(fields: &'a Fields, key: &str) -> Result<&'a str, ServiceError> {
    fields
        .get(key)
        .ok_or_else(|| ServiceError::Validation(format!("{} is required", key)))
}

/// A required field parsed as a non-negative integer.
pub fn parse_count(fields: &Fields, key: &str) -> Result<u32, ServiceError> {
    let raw = required(fields, key)?;
    raw.trim().parse().map_err(|_| {
        ServiceError::Validation(format!(
            "{} must be a non-negative integer, got {:?}",
            key, raw
        ))
    })
}

/// Message for a create call missing some required fields.
pub(crate) fn missing_fields_message(required: &[&str], missing: &[&str]) -> String {
    format!(
        "{} are all required (missing: {})",
        required.join(", "),
        missing.join(", ")
    )
}
