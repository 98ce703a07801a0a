use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;

/// Project metadata the engine reads: contingency and floor area drive the
/// aggregate-level figures, nothing else here affects calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: ProjectId,
    pub name: String,
    /// Gross internal floor area; `None` or <= 0 suppresses cost-per-m2.
    pub floor_area_m2: Option<Decimal>,
    /// Percentage buffer applied once to the subtotal, default 0.
    pub contingency_percentage: Decimal,
    pub created_at: DateTime<Utc>,
}
