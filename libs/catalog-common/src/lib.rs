//! Shared building blocks for the catalog services.
//!
//! Holds the pieces both the listing and trivia services need and which carry
//! no knowledge of either domain: page slicing, case-insensitive term
//! filtering, and the RFC-9457 problem body returned on errors.

pub mod pagination;
pub mod problem;
pub mod search;

pub use pagination::{page_count, page_slice, PageQuery, PageRequest, DEFAULT_PAGE_SIZE};
pub use problem::Problem;
pub use search::{filter_by_term, matches_term};
