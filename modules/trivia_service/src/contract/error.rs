//! Contract error types for trivia service

use thiserror::Error;

/// Trivia service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriviaError {
    /// Missing question, category, page or quiz candidate
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (question, category, page)
        resource: String,
        /// Resource identifier or query
        id: String,
    },
    /// A required field is missing or out of range
    #[error("Validation error: {message}")]
    Validation { message: String },
    /// The store rejected the operation; `message` is safe to show to users
    #[error("{message}")]
    StoreFailure { message: String },
}

impl TriviaError {
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
