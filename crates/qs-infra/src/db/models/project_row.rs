use diesel::prelude::*;

use crate::db::schema::t_project;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_project)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub floor_area_m2: Option<String>,
    pub contingency_percentage: String,
    pub created_at_ms: i64,
}
