use rust_decimal::Decimal;

use crate::estimate::catalog::{CategoryRef, CostCatalogItem};
use crate::estimate::computed::ComputedLine;
use crate::estimate::line_item::{LineItem, LineItemOrigin};
use crate::ids::{CategoryId, CostItemId, LineItemId};

/// Read-only pricing lookups resolved at the start of a calculation pass.
pub trait PricingLookups {
    fn cost_item(&self, id: CostItemId) -> Option<&CostCatalogItem>;
    fn category(&self, id: CategoryId) -> Option<&CategoryRef>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The referenced catalog item was deleted after the line was created.
    /// Callers exclude the line from totals and flag it, rather than fail
    /// the whole estimate.
    #[error("line item {line_item_id} references missing cost item {cost_item_id}")]
    MissingCatalogReference {
        line_item_id: LineItemId,
        cost_item_id: CostItemId,
    },
}

/// Converts one persisted line item into its fully-priced canonical form.
///
/// This is the single entry point for the pricing formulas; the write path
/// uses it to compute the cached `line_total` and the read path uses it for
/// every aggregate. The two origin modes price asymmetrically on purpose:
/// catalog lines carry the three-part cost model with waste amplification,
/// custom lines are a flat rate x quantity.
pub fn normalize(
    line: &LineItem,
    lookups: &impl PricingLookups,
) -> Result<ComputedLine, NormalizeError> {
    match &line.origin {
        LineItemOrigin::Catalog {
            cost_item_id,
            unit_cost_override,
        } => {
            let item = lookups.cost_item(*cost_item_id).ok_or({
                NormalizeError::MissingCatalogReference {
                    line_item_id: line.line_item_id,
                    cost_item_id: *cost_item_id,
                }
            })?;

            // The override replaces only the material unit cost. Waste
            // factor still multiplies the effective cost, so the catalog's
            // spoilage assumption survives a price override.
            let material_unit_cost = unit_cost_override.unwrap_or(item.material_cost);
            let material_total = material_unit_cost * line.quantity * item.waste_factor;
            let management_total = item.management_cost * line.quantity;
            let contractor_total = if item.is_contractor_required {
                item.contractor_cost * line.quantity
            } else {
                Decimal::ZERO
            };

            Ok(ComputedLine {
                line_item_id: line.line_item_id,
                description: item.description.clone(),
                quantity: line.quantity,
                unit_code: item.unit.code.clone(),
                material_unit_cost,
                management_unit_cost: item.management_cost,
                contractor_unit_cost: item.contractor_cost,
                waste_factor: item.waste_factor,
                is_contractor_required: item.is_contractor_required,
                material_total,
                management_total,
                contractor_total,
                line_total: material_total + management_total + contractor_total,
                category: item.category.clone(),
            })
        }
        LineItemOrigin::Custom {
            description,
            unit_rate,
            unit,
            category_id,
        } => {
            // Custom lines are flat rate x quantity: no waste factor, no
            // management/contractor split.
            let material_total = *unit_rate * line.quantity;

            // A deleted category must not corrupt historical estimates;
            // the line falls back to the synthetic bucket instead.
            let category = match lookups.category(*category_id) {
                Some(category) => category.clone(),
                None => {
                    tracing::warn!(
                        line_item_id = %line.line_item_id,
                        category_id = %category_id,
                        "custom line references unknown category, grouping as uncategorized"
                    );
                    CategoryRef::uncategorized()
                }
            };

            Ok(ComputedLine {
                line_item_id: line.line_item_id,
                description: description.clone(),
                quantity: line.quantity,
                unit_code: unit.clone(),
                material_unit_cost: *unit_rate,
                management_unit_cost: Decimal::ZERO,
                contractor_unit_cost: Decimal::ZERO,
                waste_factor: Decimal::ONE,
                is_contractor_required: false,
                material_total,
                management_total: Decimal::ZERO,
                contractor_total: Decimal::ZERO,
                line_total: material_total,
                category,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::catalog::UnitRef;
    use crate::estimate::snapshot::PricingSnapshot;
    use crate::ids::ProjectId;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn category(id: i64) -> CategoryRef {
        CategoryRef {
            category_id: Some(CategoryId::new(id)),
            code: format!("C{id}"),
            name: format!("Category {id}"),
        }
    }

    fn catalog_item(id: i64) -> CostCatalogItem {
        CostCatalogItem {
            cost_item_id: CostItemId::new(id),
            code: format!("CI-{id}"),
            description: format!("Cost item {id}"),
            unit: UnitRef {
                code: "m2".to_string(),
                name: "square metre".to_string(),
            },
            material_cost: dec!(100),
            management_cost: dec!(5),
            contractor_cost: dec!(0),
            is_contractor_required: false,
            waste_factor: dec!(1.1),
            category: category(1),
        }
    }

    fn line(origin: LineItemOrigin, quantity: Decimal) -> LineItem {
        LineItem {
            line_item_id: LineItemId::new(11),
            project_id: ProjectId::new(1),
            quantity,
            origin,
            notes: None,
            nrm2_code: None,
            is_active: true,
            version_number: 1,
            created_by: None,
            created_at: Utc::now(),
            line_total: Decimal::ZERO,
        }
    }

    #[test]
    fn override_replaces_material_cost_but_keeps_waste_and_management() {
        let snapshot = PricingSnapshot::from_parts(vec![catalog_item(7)], vec![]);
        let line = line(
            LineItemOrigin::Catalog {
                cost_item_id: CostItemId::new(7),
                unit_cost_override: Some(dec!(50)),
            },
            dec!(2),
        );

        let computed = normalize(&line, &snapshot).unwrap();

        // 50 x 2 x 1.1, the catalog's 100 must not appear anywhere.
        assert_eq!(computed.material_unit_cost, dec!(50));
        assert_eq!(computed.material_total, dec!(110.0));
        assert_eq!(computed.management_total, dec!(10));
        assert_eq!(computed.contractor_total, dec!(0));
        assert_eq!(computed.line_total, dec!(120.0));
    }

    #[test]
    fn catalog_line_without_override_uses_catalog_price() {
        let snapshot = PricingSnapshot::from_parts(vec![catalog_item(7)], vec![]);
        let line = line(
            LineItemOrigin::Catalog {
                cost_item_id: CostItemId::new(7),
                unit_cost_override: None,
            },
            dec!(3),
        );

        let computed = normalize(&line, &snapshot).unwrap();

        assert_eq!(computed.material_total, dec!(330.0)); // 100 x 3 x 1.1
        assert_eq!(computed.management_total, dec!(15));
        assert_eq!(computed.line_total, dec!(345.0));
    }

    #[test]
    fn contractor_cost_counts_only_when_required() {
        let mut item = catalog_item(7);
        item.contractor_cost = dec!(20);
        item.is_contractor_required = false;
        let snapshot = PricingSnapshot::from_parts(vec![item.clone()], vec![]);
        let catalog_line = line(
            LineItemOrigin::Catalog {
                cost_item_id: CostItemId::new(7),
                unit_cost_override: None,
            },
            dec!(2),
        );

        let computed = normalize(&catalog_line, &snapshot).unwrap();
        assert_eq!(computed.contractor_total, dec!(0));

        item.is_contractor_required = true;
        let snapshot = PricingSnapshot::from_parts(vec![item], vec![]);
        let computed = normalize(&catalog_line, &snapshot).unwrap();
        assert_eq!(computed.contractor_total, dec!(40));
        assert!(computed.is_contractor_required);
    }

    #[test]
    fn custom_line_is_flat_rate_times_quantity() {
        let snapshot = PricingSnapshot::from_parts(vec![], vec![category(3)]);
        let custom = line(
            LineItemOrigin::Custom {
                description: "Skip hire".to_string(),
                unit_rate: dec!(25.50),
                unit: "wk".to_string(),
                category_id: CategoryId::new(3),
            },
            dec!(4),
        );

        let computed = normalize(&custom, &snapshot).unwrap();

        assert_eq!(computed.line_total, dec!(102.00));
        assert_eq!(computed.material_total, dec!(102.00));
        assert_eq!(computed.management_total, dec!(0));
        assert_eq!(computed.contractor_total, dec!(0));
        assert!(!computed.is_contractor_required);
        assert_eq!(computed.category, category(3));
    }

    #[test]
    fn missing_catalog_item_is_reported_with_both_ids() {
        let snapshot = PricingSnapshot::from_parts(vec![], vec![]);
        let orphan = line(
            LineItemOrigin::Catalog {
                cost_item_id: CostItemId::new(99),
                unit_cost_override: None,
            },
            dec!(1),
        );

        let err = normalize(&orphan, &snapshot).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MissingCatalogReference {
                line_item_id: LineItemId::new(11),
                cost_item_id: CostItemId::new(99),
            }
        );
    }

    #[test]
    fn custom_line_with_unknown_category_falls_back_to_uncategorized() {
        let snapshot = PricingSnapshot::from_parts(vec![], vec![]);
        let custom = line(
            LineItemOrigin::Custom {
                description: "Old line".to_string(),
                unit_rate: dec!(10),
                unit: "nr".to_string(),
                category_id: CategoryId::new(404),
            },
            dec!(2),
        );

        let computed = normalize(&custom, &snapshot).unwrap();
        assert_eq!(computed.category, CategoryRef::uncategorized());
        assert_eq!(computed.line_total, dec!(20));
    }
}
