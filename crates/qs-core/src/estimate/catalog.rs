use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, CostItemId};

/// Measurement unit attached to a catalog item (e.g. `m2` / "square metre").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRef {
    pub code: String,
    pub name: String,
}

/// Cost category a line is grouped under.
///
/// `category_id` is `None` only for the synthetic bucket that collects lines
/// whose category no longer resolves; deleting a category must not corrupt
/// historical estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub category_id: Option<CategoryId>,
    pub code: String,
    pub name: String,
}

impl CategoryRef {
    pub fn uncategorized() -> Self {
        Self {
            category_id: None,
            code: "UNC".to_string(),
            name: "Uncategorized".to_string(),
        }
    }
}

/// A priced item in the shared cost library, read-only within a calculation.
///
/// Carries the three-part cost model: material (subject to the waste
/// factor), management overhead and an optional outsourced contractor
/// component. The category is resolved through the sub-element chain by the
/// persistence layer before the item reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCatalogItem {
    pub cost_item_id: CostItemId,
    pub code: String,
    pub description: String,
    pub unit: UnitRef,
    pub material_cost: Decimal,
    pub management_cost: Decimal,
    pub contractor_cost: Decimal,
    pub is_contractor_required: bool,
    /// Multiplier on material cost only, never on management or contractor.
    pub waste_factor: Decimal,
    pub category: CategoryRef,
}
