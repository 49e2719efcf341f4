//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::TriviaError;
pub use catalog_common::Problem;

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: TriviaError) -> Problem {
    match error {
        TriviaError::NotFound { resource, id } => {
            Problem::not_found(format!("{resource} '{id}' was not found"))
        }
        TriviaError::Validation { message } => Problem::bad_request(message),
        TriviaError::StoreFailure { message } => Problem::unprocessable(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failure_keeps_user_message() {
        let problem = map_domain_error(TriviaError::store_failure(
            "An error occurred. Question could not be created.",
        ));
        assert_eq!(problem.status, 422);
        assert_eq!(
            problem.detail.as_deref(),
            Some("An error occurred. Question could not be created.")
        );
    }

    #[test]
    fn missing_page_is_not_found() {
        let problem = map_domain_error(TriviaError::not_found("page", 7));
        assert_eq!(problem.status, 404);
        assert_eq!(problem.detail.as_deref(), Some("page '7' was not found"));
    }
}
