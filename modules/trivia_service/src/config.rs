//! Configuration for trivia service module

use catalog_common::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Trivia service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Questions per page for every paged endpoint
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_per_page: default_questions_per_page(),
        }
    }
}

fn default_questions_per_page() -> usize {
    DEFAULT_PAGE_SIZE
}
