//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (hotel-core)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds "which record" context                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (desk app) ← Serialized for the presentation layer           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hotel_core::{CoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id in the store.
    ///
    /// ## When This Occurs
    /// - A stale view sends a status change for a record id that never existed
    /// - Invoice generation for an unknown reservation
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },

    /// Domain rule or validation failure. The store is unchanged.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

impl StoreError {
    /// Returns true for a rejected form (missing or malformed field).
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::Validation(_)))
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NotFound {
            entity: "Reservation",
            id: 42,
        };
        assert_eq!(err.to_string(), "Reservation not found: 42");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_is_flagged() {
        let err: StoreError = ValidationError::Required {
            field: "room number".into(),
        }
        .into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: room number is required");
    }
}
