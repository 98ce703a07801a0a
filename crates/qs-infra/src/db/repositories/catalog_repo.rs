use anyhow::Result;
use diesel::prelude::*;

use qs_core::estimate::{CategoryRef, CostCatalogItem, LineItem, LineItemOrigin, PricingSnapshot};
use qs_core::ids::{CategoryId, CostItemId};
use qs_core::ports::CatalogRepositoryPort;

use crate::db::mapper::catalog_mapper;
use crate::db::models::{CategoryRow, CostItemRow, SubElementRow};
use crate::db::executor::DbExecutor;
use crate::db::schema::{t_category, t_cost_item, t_sub_element};

pub struct DieselCatalogRepository<E> {
    executor: E,
}

impl<E> DieselCatalogRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

type JoinedCostItemRow = (CostItemRow, (SubElementRow, CategoryRow));

fn joined_to_domain(row: &JoinedCostItemRow) -> Result<CostCatalogItem> {
    let (item, (_sub_element, category)) = row;
    catalog_mapper::cost_item_to_domain(item, category)
}

#[async_trait::async_trait]
impl<E: DbExecutor> CatalogRepositoryPort for DieselCatalogRepository<E> {
    async fn snapshot_for_lines(&self, lines: &[LineItem]) -> Result<PricingSnapshot> {
        let mut cost_item_ids = Vec::new();
        let mut category_ids = Vec::new();
        for line in lines {
            match &line.origin {
                LineItemOrigin::Catalog { cost_item_id, .. } => {
                    cost_item_ids.push(cost_item_id.inner());
                }
                LineItemOrigin::Custom { category_id, .. } => {
                    category_ids.push(category_id.inner());
                }
            }
        }

        self.executor.run(move |conn| {
            let item_rows: Vec<JoinedCostItemRow> = t_cost_item::table
                .inner_join(t_sub_element::table.inner_join(t_category::table))
                .filter(t_cost_item::id.eq_any(&cost_item_ids))
                .load(conn)?;
            let cost_items = item_rows
                .iter()
                .map(joined_to_domain)
                .collect::<Result<Vec<_>>>()?;

            let category_rows = t_category::table
                .filter(t_category::id.eq_any(&category_ids))
                .load::<CategoryRow>(conn)?;
            let categories = category_rows
                .iter()
                .map(catalog_mapper::category_to_domain)
                .collect();

            Ok(PricingSnapshot::from_parts(cost_items, categories))
        })
    }

    async fn get_cost_item(&self, cost_item_id: CostItemId) -> Result<Option<CostCatalogItem>> {
        self.executor.run(|conn| {
            let row: Option<JoinedCostItemRow> = t_cost_item::table
                .inner_join(t_sub_element::table.inner_join(t_category::table))
                .filter(t_cost_item::id.eq(cost_item_id.inner()))
                .first(conn)
                .optional()?;

            row.as_ref().map(joined_to_domain).transpose()
        })
    }

    async fn get_category(&self, category_id: CategoryId) -> Result<Option<CategoryRef>> {
        self.executor.run(|conn| {
            let row = t_category::table
                .filter(t_category::id.eq(category_id.inner()))
                .first::<CategoryRow>(conn)
                .optional()?;

            Ok(row.as_ref().map(catalog_mapper::category_to_domain))
        })
    }
}
