use diesel::prelude::*;

use crate::db::schema::{t_category, t_sub_element};

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_category)]
pub struct CategoryRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_sub_element)]
pub struct SubElementRow {
    pub id: i64,
    pub category_id: i64,
    pub code: String,
    pub name: String,
}
