use std::collections::HashMap;

use crate::estimate::catalog::{CategoryRef, CostCatalogItem};
use crate::estimate::normalize::PricingLookups;
use crate::ids::{CategoryId, CostItemId};

/// In-memory snapshot of the catalog state a single calculation runs
/// against. Loaded once per request so the pass is internally consistent
/// even while catalog administrators edit the live tables.
#[derive(Debug, Clone, Default)]
pub struct PricingSnapshot {
    cost_items: HashMap<CostItemId, CostCatalogItem>,
    categories: HashMap<CategoryId, CategoryRef>,
}

impl PricingSnapshot {
    pub fn from_parts(
        cost_items: Vec<CostCatalogItem>,
        categories: Vec<CategoryRef>,
    ) -> Self {
        let cost_items = cost_items
            .into_iter()
            .map(|item| (item.cost_item_id, item))
            .collect();
        let categories = categories
            .into_iter()
            .filter_map(|category| category.category_id.map(|id| (id, category)))
            .collect();
        Self {
            cost_items,
            categories,
        }
    }
}

impl PricingLookups for PricingSnapshot {
    fn cost_item(&self, id: CostItemId) -> Option<&CostCatalogItem> {
        self.cost_items.get(&id)
    }

    fn category(&self, id: CategoryId) -> Option<&CategoryRef> {
        self.categories.get(&id)
    }
}
