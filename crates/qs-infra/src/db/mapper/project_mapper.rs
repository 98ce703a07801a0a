use anyhow::Result;
use chrono::DateTime;

use qs_core::estimate::Project;
use qs_core::ids::ProjectId;

use crate::db::mapper::money::{parse_money, parse_money_opt};
use crate::db::models::ProjectRow;

pub fn to_domain(row: &ProjectRow) -> Result<Project> {
    Ok(Project {
        project_id: ProjectId::new(row.id),
        name: row.name.clone(),
        floor_area_m2: parse_money_opt(row.floor_area_m2.as_deref(), "floor_area_m2")?,
        contingency_percentage: parse_money(
            &row.contingency_percentage,
            "contingency_percentage",
        )?,
        created_at: DateTime::from_timestamp_millis(row.created_at_ms).unwrap_or_default(),
    })
}
