use diesel::prelude::*;

use crate::db::schema::t_cost_item;

/// Money columns are stored as TEXT in canonical decimal notation; the
/// mapper parses them with `rust_decimal`.
#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_cost_item)]
pub struct CostItemRow {
    pub id: i64,
    pub sub_element_id: i64,
    pub code: String,
    pub description: String,
    pub unit_code: String,
    pub unit_name: String,
    pub material_cost: String,
    pub management_cost: String,
    pub contractor_cost: String,
    pub is_contractor_required: bool,
    pub waste_factor: String,
}
