use diesel::prelude::*;

use crate::db::schema::t_estimate_line_item;

/// Legacy two-shaped row: catalog-sourced lines populate `cost_item_id`
/// (plus optional `unit_cost_override`), custom lines populate the
/// `custom_*` columns and `category_id`. The mapper rejects rows that are
/// neither.
#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = t_estimate_line_item)]
pub struct LineItemRow {
    pub id: i64,
    pub project_id: i64,
    pub cost_item_id: Option<i64>,
    pub unit_cost_override: Option<String>,
    pub custom_description: Option<String>,
    pub custom_unit_rate: Option<String>,
    pub custom_unit: Option<String>,
    pub category_id: Option<i64>,
    pub quantity: String,
    pub notes: Option<String>,
    pub nrm2_code: Option<String>,
    pub is_active: bool,
    pub version_number: i32,
    pub created_by: Option<String>,
    pub created_at_ms: i64,
    pub line_total: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_estimate_line_item)]
pub struct NewLineItemRow {
    pub project_id: i64,
    pub cost_item_id: Option<i64>,
    pub unit_cost_override: Option<String>,
    pub custom_description: Option<String>,
    pub custom_unit_rate: Option<String>,
    pub custom_unit: Option<String>,
    pub category_id: Option<i64>,
    pub quantity: String,
    pub notes: Option<String>,
    pub nrm2_code: Option<String>,
    pub is_active: bool,
    pub version_number: i32,
    pub created_by: Option<String>,
    pub created_at_ms: i64,
    pub line_total: String,
}
