use anyhow::Result;
use chrono::Utc;
use diesel::prelude::*;
use log::error;
use rust_decimal::Decimal;

use qs_core::estimate::{LineItem, LineItemOrigin, NewLineItem};
use qs_core::ids::{LineItemId, ProjectId};
use qs_core::ports::LineItemRepositoryPort;

use crate::db::mapper::line_item_mapper;
use crate::db::mapper::money::money_to_db;
use crate::db::models::LineItemRow;
use crate::db::executor::DbExecutor;
use crate::db::schema::t_estimate_line_item;

pub struct DieselLineItemRepository<E> {
    executor: E,
}

impl<E> DieselLineItemRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

/// Maps loaded rows, dropping any that violate the origin invariant. A
/// corrupt row is a write-path bug; it must not make the whole estimate
/// unviewable, but it must not pass silently either.
fn map_rows(rows: Vec<LineItemRow>) -> Vec<LineItem> {
    rows.iter()
        .filter_map(|row| match line_item_mapper::to_domain(row) {
            Ok(line) => Some(line),
            Err(err) => {
                error!("excluding corrupt line item row from load: {err}");
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl<E: DbExecutor> LineItemRepositoryPort for DieselLineItemRepository<E> {
    async fn list_active(&self, project_id: ProjectId) -> Result<Vec<LineItem>> {
        self.executor.run(|conn| {
            let rows = t_estimate_line_item::table
                .filter(t_estimate_line_item::project_id.eq(project_id.inner()))
                .filter(t_estimate_line_item::is_active.eq(true))
                .order(t_estimate_line_item::id.asc())
                .load::<LineItemRow>(conn)?;

            Ok(map_rows(rows))
        })
    }

    async fn list_active_page(
        &self,
        project_id: ProjectId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LineItem>> {
        self.executor.run(|conn| {
            let rows = t_estimate_line_item::table
                .filter(t_estimate_line_item::project_id.eq(project_id.inner()))
                .filter(t_estimate_line_item::is_active.eq(true))
                .order(t_estimate_line_item::id.asc())
                .limit(limit)
                .offset(offset)
                .load::<LineItemRow>(conn)?;

            Ok(map_rows(rows))
        })
    }

    async fn get(&self, line_item_id: LineItemId) -> Result<Option<LineItem>> {
        self.executor.run(|conn| {
            let row = t_estimate_line_item::table
                .filter(t_estimate_line_item::id.eq(line_item_id.inner()))
                .first::<LineItemRow>(conn)
                .optional()?;

            row.as_ref()
                .map(|row| line_item_mapper::to_domain(row).map_err(Into::into))
                .transpose()
        })
    }

    async fn insert(&self, draft: &NewLineItem, line_total: Decimal) -> Result<LineItem> {
        let new_row = line_item_mapper::new_row(draft, line_total, Utc::now().timestamp_millis());
        self.executor.run(move |conn| {
            let row = diesel::insert_into(t_estimate_line_item::table)
                .values(&new_row)
                .get_result::<LineItemRow>(conn)?;

            line_item_mapper::to_domain(&row).map_err(Into::into)
        })
    }

    async fn update(&self, line: &LineItem) -> Result<()> {
        let unit_cost_override = match &line.origin {
            LineItemOrigin::Catalog {
                unit_cost_override, ..
            } => unit_cost_override.as_ref().map(money_to_db),
            LineItemOrigin::Custom { .. } => None,
        };

        self.executor.run(|conn| {
            diesel::update(
                t_estimate_line_item::table
                    .filter(t_estimate_line_item::id.eq(line.line_item_id.inner())),
            )
            .set((
                t_estimate_line_item::quantity.eq(money_to_db(&line.quantity)),
                t_estimate_line_item::unit_cost_override.eq(unit_cost_override),
                t_estimate_line_item::notes.eq(line.notes.clone()),
                t_estimate_line_item::line_total.eq(money_to_db(&line.line_total)),
                t_estimate_line_item::version_number.eq(line.version_number),
            ))
            .execute(conn)?;

            Ok(())
        })
    }

    async fn soft_delete(&self, line_item_id: LineItemId) -> Result<bool> {
        self.executor.run(|conn| {
            let affected = diesel::update(
                t_estimate_line_item::table
                    .filter(t_estimate_line_item::id.eq(line_item_id.inner()))
                    .filter(t_estimate_line_item::is_active.eq(true)),
            )
            .set(t_estimate_line_item::is_active.eq(false))
            .execute(conn)?;

            Ok(affected > 0)
        })
    }
}
