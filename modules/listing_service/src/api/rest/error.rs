//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::ListingError;
pub use catalog_common::Problem;

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: ListingError) -> Problem {
    match error {
        ListingError::NotFound { resource, id } => {
            Problem::not_found(format!("{resource} with id '{id}' was not found"))
        }
        ListingError::Validation { message } => Problem::bad_request(message),
        ListingError::StoreFailure { message } => Problem::unprocessable(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_error_kind_to_its_status() {
        assert_eq!(map_domain_error(ListingError::not_found("venue", 9)).status, 404);
        assert_eq!(map_domain_error(ListingError::validation("missing")).status, 400);

        let problem = map_domain_error(ListingError::store_failure(
            "An error occurred. Show could not be listed.",
        ));
        assert_eq!(problem.status, 422);
        assert_eq!(
            problem.detail.as_deref(),
            Some("An error occurred. Show could not be listed.")
        );
    }
}
