//! Contract error types for listing service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Listing service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Venue, artist or show not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (venue, artist)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// A required field is missing or malformed
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// The store rejected the operation; `message` is safe to show to users
    #[error("{message}")]
    StoreFailure {
        /// User-facing failure text
        message: String,
    },
}

impl ListingError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn store_failure(message: impl Into<String>) -> Self {
        Self::StoreFailure {
            message: message.into(),
        }
    }
}
