//! Error types for record service operations.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for record service operations.
///
/// A lookup that matches nothing is not an error; it comes back as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller input is missing, empty or malformed.
    Validation(String),
    /// The record store failed.
    Persistence(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "{}", msg),
            ServiceError::Persistence(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::Persistence(e) => Some(e),
            ServiceError::Validation(_) => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Persistence(err)
    }
}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::Persistence(e) if e.is_transient() => 503,
            ServiceError::Persistence(_) => 500,
        }
    }
}
