//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Configuration needed by the application layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Maximum number of line items returned by a single list query
    pub max_line_items_per_page: u64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            max_line_items_per_page: 500,
        }
    }
}
