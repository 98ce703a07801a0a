use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, CostItemId, LineItemId, ProjectId};

/// Minimum length for a custom line description.
pub const MIN_CUSTOM_DESCRIPTION_LEN: usize = 3;

/// Where a line's pricing comes from.
///
/// Modeled as a sum type so the legacy "neither or both populated" row
/// state is unrepresentable in the domain; the persistence mapper is the
/// single place that still has to check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineItemOrigin {
    /// Priced by reference to a shared cost-library entry. The override
    /// replaces only the material unit cost; waste factor, management and
    /// contractor costs stay driven by the catalog item.
    Catalog {
        cost_item_id: CostItemId,
        unit_cost_override: Option<Decimal>,
    },
    /// Ad-hoc line with a manually entered flat rate, not tied to the
    /// catalog. Needs an explicit category since there is no item to
    /// derive one from.
    Custom {
        description: String,
        unit_rate: Decimal,
        unit: String,
        category_id: CategoryId,
    },
}

/// One persisted row of a project's estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_item_id: LineItemId,
    pub project_id: ProjectId,
    pub quantity: Decimal,
    pub origin: LineItemOrigin,
    pub notes: Option<String>,
    /// NRM2 reference tag, carried through but never used in calculation.
    pub nrm2_code: Option<String>,
    /// Soft-delete flag; inactive lines are excluded from all aggregation
    /// but kept for audit.
    pub is_active: bool,
    pub version_number: i32,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Last-computed total, cached for cheap list views. Anything that
    /// produces subtotals must recompute through the normalizer instead.
    pub line_total: Decimal,
}

/// Write-path validation failures, caught before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineItemValidationError {
    #[error("quantity must be greater than zero, got {0}")]
    QuantityNotPositive(Decimal),
    #[error("custom description must be at least {MIN_CUSTOM_DESCRIPTION_LEN} characters")]
    DescriptionTooShort,
    #[error("custom unit rate must not be negative, got {0}")]
    NegativeUnitRate(Decimal),
    #[error("unit cost override must not be negative, got {0}")]
    NegativeOverride(Decimal),
    #[error("unit cost override only applies to catalog-sourced lines")]
    OverrideOnCustomLine,
}

/// A line item as submitted by the add operation, before it has an id or a
/// computed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub project_id: ProjectId,
    pub quantity: Decimal,
    pub origin: LineItemOrigin,
    pub notes: Option<String>,
    pub nrm2_code: Option<String>,
    pub created_by: Option<String>,
}

impl NewLineItem {
    pub fn validate(&self) -> Result<(), LineItemValidationError> {
        if self.quantity <= Decimal::ZERO {
            return Err(LineItemValidationError::QuantityNotPositive(self.quantity));
        }
        match &self.origin {
            LineItemOrigin::Catalog {
                unit_cost_override, ..
            } => {
                if let Some(override_cost) = unit_cost_override {
                    if *override_cost < Decimal::ZERO {
                        return Err(LineItemValidationError::NegativeOverride(*override_cost));
                    }
                }
            }
            LineItemOrigin::Custom {
                description,
                unit_rate,
                ..
            } => {
                if description.trim().chars().count() < MIN_CUSTOM_DESCRIPTION_LEN {
                    return Err(LineItemValidationError::DescriptionTooShort);
                }
                if *unit_rate < Decimal::ZERO {
                    return Err(LineItemValidationError::NegativeUnitRate(*unit_rate));
                }
            }
        }
        Ok(())
    }
}

/// Mutable-field patch for the update operation. Origin, description and
/// category are immutable after creation.
///
/// Outer `Option` = "was a change requested"; for override and notes the
/// inner `Option` is the new value, `None` clearing the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemPatch {
    pub quantity: Option<Decimal>,
    pub unit_cost_override: Option<Option<Decimal>>,
    pub notes: Option<Option<String>>,
}

impl LineItemPatch {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit_cost_override.is_none() && self.notes.is_none()
    }
}
