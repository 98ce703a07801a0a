use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::estimate::catalog::CategoryRef;
use crate::ids::{CostItemId, LineItemId, ProjectId};

/// The normalized, fully-priced representation of one line item, derived
/// once per calculation pass and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedLine {
    pub line_item_id: LineItemId,
    pub description: String,
    pub quantity: Decimal,
    pub unit_code: String,
    pub material_unit_cost: Decimal,
    pub management_unit_cost: Decimal,
    pub contractor_unit_cost: Decimal,
    pub waste_factor: Decimal,
    pub is_contractor_required: bool,
    pub material_total: Decimal,
    pub management_total: Decimal,
    pub contractor_total: Decimal,
    /// material_total + management_total + contractor_total
    pub line_total: Decimal,
    #[serde(flatten)]
    pub category: CategoryRef,
}

/// Per-category subtotal grouping, lines kept in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    #[serde(flatten)]
    pub category: CategoryRef,
    pub line_count: usize,
    pub lines: Vec<ComputedLine>,
    pub subtotal: Decimal,
    /// Sum of contractor_total across contractor-required lines only.
    pub contractor_items_subtotal: Decimal,
}

impl CategoryAggregate {
    pub fn empty(category: CategoryRef) -> Self {
        Self {
            category,
            line_count: 0,
            lines: Vec::new(),
            subtotal: Decimal::ZERO,
            contractor_items_subtotal: Decimal::ZERO,
        }
    }

    pub fn push(&mut self, line: ComputedLine) {
        self.subtotal += line.line_total;
        if line.is_contractor_required {
            self.contractor_items_subtotal += line.contractor_total;
        }
        self.line_count += 1;
        self.lines.push(line);
    }
}

/// A catalog-sourced line whose cost item no longer resolves. Excluded from
/// the totals but reported so the UI can surface "no longer available"
/// instead of silently under-totaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedLine {
    pub line_item_id: LineItemId,
    pub cost_item_id: CostItemId,
}

/// The engine's output: one internally-consistent financial summary,
/// consumed verbatim by the summary endpoint, PDF export and dashboards.
///
/// Invariants (held to currency rounding tolerance):
/// - sum of category subtotals == `subtotal`
/// - `contractor_cost_total + volunteer_cost_total == subtotal`
/// - `grand_total == subtotal + contingency_amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimateTotals {
    pub project_id: ProjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_area_m2: Option<Decimal>,
    pub categories: Vec<CategoryAggregate>,
    pub subtotal: Decimal,
    pub contingency_percentage: Decimal,
    pub contingency_amount: Decimal,
    pub grand_total: Decimal,
    /// Omitted, not zero, when the floor area is unknown: a $0/m2 rate
    /// would be meaningless.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_m2: Option<Decimal>,
    pub contractor_cost_total: Decimal,
    pub volunteer_cost_total: Decimal,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unresolved_lines: Vec<UnresolvedLine>,
}
