use anyhow::Result;

use qs_core::estimate::{CategoryRef, CostCatalogItem, UnitRef};
use qs_core::ids::{CategoryId, CostItemId};

use crate::db::mapper::money::parse_money;
use crate::db::models::{CategoryRow, CostItemRow};

pub fn category_to_domain(row: &CategoryRow) -> CategoryRef {
    CategoryRef {
        category_id: Some(CategoryId::new(row.id)),
        code: row.code.clone(),
        name: row.name.clone(),
    }
}

/// Builds a catalog item from its row joined through the sub-element chain
/// to its category.
pub fn cost_item_to_domain(row: &CostItemRow, category: &CategoryRow) -> Result<CostCatalogItem> {
    Ok(CostCatalogItem {
        cost_item_id: CostItemId::new(row.id),
        code: row.code.clone(),
        description: row.description.clone(),
        unit: UnitRef {
            code: row.unit_code.clone(),
            name: row.unit_name.clone(),
        },
        material_cost: parse_money(&row.material_cost, "material_cost")?,
        management_cost: parse_money(&row.management_cost, "management_cost")?,
        contractor_cost: parse_money(&row.contractor_cost, "contractor_cost")?,
        is_contractor_required: row.is_contractor_required,
        waste_factor: parse_money(&row.waste_factor, "waste_factor")?,
        category: category_to_domain(category),
    })
}
