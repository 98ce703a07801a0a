use rust_decimal::{Decimal, RoundingStrategy};

use crate::estimate::aggregate::aggregate_by_category;
use crate::estimate::computed::{ProjectEstimateTotals, UnresolvedLine};
use crate::estimate::line_item::LineItem;
use crate::estimate::normalize::{normalize, NormalizeError, PricingLookups};
use crate::estimate::project::Project;

/// Rounds a currency amount to two decimal places, half away from zero.
/// Applied only at the aggregate level; per-line totals stay unrounded so
/// summing never drifts.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The authoritative calculation path: current line items + current catalog
/// snapshot in, one internally-consistent summary out.
///
/// Inactive lines never contribute. Catalog-sourced lines whose cost item
/// no longer resolves are excluded from every figure and reported in
/// `unresolved_lines`. A project with no active lines yields a zero
/// summary, not an error.
pub fn calculate(
    project: &Project,
    lines: &[LineItem],
    lookups: &impl PricingLookups,
) -> ProjectEstimateTotals {
    let mut computed = Vec::with_capacity(lines.len());
    let mut unresolved_lines = Vec::new();

    for line in lines.iter().filter(|line| line.is_active) {
        match normalize(line, lookups) {
            Ok(computed_line) => computed.push(computed_line),
            Err(NormalizeError::MissingCatalogReference {
                line_item_id,
                cost_item_id,
            }) => {
                tracing::warn!(
                    project_id = %project.project_id,
                    line_item_id = %line_item_id,
                    cost_item_id = %cost_item_id,
                    "excluding line with missing catalog reference from totals"
                );
                unresolved_lines.push(UnresolvedLine {
                    line_item_id,
                    cost_item_id,
                });
            }
        }
    }

    let categories = aggregate_by_category(&computed);
    let subtotal: Decimal = categories.iter().map(|category| category.subtotal).sum();
    let contractor_cost_total: Decimal =
        computed.iter().map(|line| line.contractor_total).sum();
    // Everything not flagged contractor-required is internally delivered,
    // management cost of contracted items included (observed behavior).
    let volunteer_cost_total = subtotal - contractor_cost_total;

    // Rounded once, after the multiplication, never per line.
    let contingency_amount =
        round_currency(subtotal * project.contingency_percentage / Decimal::ONE_HUNDRED);
    let grand_total = subtotal + contingency_amount;

    let cost_per_m2 = project
        .floor_area_m2
        .filter(|area| *area > Decimal::ZERO)
        .map(|area| round_currency(grand_total / area));

    ProjectEstimateTotals {
        project_id: project.project_id,
        floor_area_m2: project.floor_area_m2,
        categories,
        subtotal,
        contingency_percentage: project.contingency_percentage,
        contingency_amount,
        grand_total,
        cost_per_m2,
        contractor_cost_total,
        volunteer_cost_total,
        unresolved_lines,
    }
}
