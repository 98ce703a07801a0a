use chrono::DateTime;
use rust_decimal::Decimal;

use qs_core::estimate::{LineItem, LineItemOrigin, NewLineItem};
use qs_core::ids::{CategoryId, CostItemId, LineItemId, ProjectId};

use crate::db::mapper::money::money_to_db;
use crate::db::models::{LineItemRow, NewLineItemRow};

/// Row-level data-integrity failures. Write-path validation should make
/// these impossible; if one surfaces on read it is a bug in whatever wrote
/// the row, and the repository logs it loudly and skips the row so a single
/// corrupt line cannot make a whole estimate unviewable.
#[derive(Debug, thiserror::Error)]
pub enum LineItemRowError {
    #[error("line item row {id}: neither catalog reference nor custom pricing populated")]
    InvalidOrigin { id: i64 },
    #[error("line item row {id}: unparseable decimal in {column}: {value:?}")]
    BadDecimal {
        id: i64,
        column: &'static str,
        value: String,
    },
}

fn parse_row_money(
    id: i64,
    column: &'static str,
    value: &str,
) -> Result<Decimal, LineItemRowError> {
    value
        .parse()
        .map_err(|_| LineItemRowError::BadDecimal {
            id,
            column,
            value: value.to_string(),
        })
}

pub fn to_domain(row: &LineItemRow) -> Result<LineItem, LineItemRowError> {
    // The sum type makes the "neither or both" state unrepresentable in
    // the domain; this is the one place left that has to check it.
    // Catalog reference wins if a row somehow carries both shapes.
    let origin = if let Some(cost_item_id) = row.cost_item_id {
        LineItemOrigin::Catalog {
            cost_item_id: CostItemId::new(cost_item_id),
            unit_cost_override: row
                .unit_cost_override
                .as_deref()
                .map(|v| parse_row_money(row.id, "unit_cost_override", v))
                .transpose()?,
        }
    } else {
        match (&row.custom_description, &row.custom_unit_rate) {
            (Some(description), Some(unit_rate)) => LineItemOrigin::Custom {
                description: description.clone(),
                unit_rate: parse_row_money(row.id, "custom_unit_rate", unit_rate)?,
                unit: row.custom_unit.clone().unwrap_or_default(),
                category_id: CategoryId::new(row.category_id.unwrap_or(0)),
            },
            _ => return Err(LineItemRowError::InvalidOrigin { id: row.id }),
        }
    };

    Ok(LineItem {
        line_item_id: LineItemId::new(row.id),
        project_id: ProjectId::new(row.project_id),
        quantity: parse_row_money(row.id, "quantity", &row.quantity)?,
        origin,
        notes: row.notes.clone(),
        nrm2_code: row.nrm2_code.clone(),
        is_active: row.is_active,
        version_number: row.version_number,
        created_by: row.created_by.clone(),
        created_at: DateTime::from_timestamp_millis(row.created_at_ms).unwrap_or_default(),
        line_total: parse_row_money(row.id, "line_total", &row.line_total)?,
    })
}

pub fn new_row(draft: &NewLineItem, line_total: Decimal, created_at_ms: i64) -> NewLineItemRow {
    let (cost_item_id, unit_cost_override, custom_description, custom_unit_rate, custom_unit, category_id) =
        match &draft.origin {
            LineItemOrigin::Catalog {
                cost_item_id,
                unit_cost_override,
            } => (
                Some(cost_item_id.inner()),
                unit_cost_override.as_ref().map(money_to_db),
                None,
                None,
                None,
                None,
            ),
            LineItemOrigin::Custom {
                description,
                unit_rate,
                unit,
                category_id,
            } => (
                None,
                None,
                Some(description.clone()),
                Some(money_to_db(unit_rate)),
                Some(unit.clone()),
                Some(category_id.inner()),
            ),
        };

    NewLineItemRow {
        project_id: draft.project_id.inner(),
        cost_item_id,
        unit_cost_override,
        custom_description,
        custom_unit_rate,
        custom_unit,
        category_id,
        quantity: money_to_db(&draft.quantity),
        notes: draft.notes.clone(),
        nrm2_code: draft.nrm2_code.clone(),
        is_active: true,
        version_number: 1,
        created_by: draft.created_by.clone(),
        created_at_ms,
        line_total: money_to_db(&line_total),
    }
}
