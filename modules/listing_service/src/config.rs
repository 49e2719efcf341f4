//! Configuration for listing service module

use serde::{Deserialize, Serialize};

/// Listing service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// chrono format string used to render show start times
    #[serde(default = "default_show_time_format")]
    pub show_time_format: String,

    /// Reject image/facebook/website links that are not absolute http(s) URLs
    #[serde(default = "default_true")]
    pub validate_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_time_format: default_show_time_format(),
            validate_links: true,
        }
    }
}

fn default_show_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_true() -> bool {
    true
}
