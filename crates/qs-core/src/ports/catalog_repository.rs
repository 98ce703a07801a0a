use anyhow::Result;

use crate::estimate::{CategoryRef, CostCatalogItem, LineItem, PricingSnapshot};
use crate::ids::{CategoryId, CostItemId};

/// Read-only access to the shared cost library. The engine never mutates
/// catalog state.
#[async_trait::async_trait]
pub trait CatalogRepositoryPort: Send + Sync {
    /// Loads every cost item and category the given lines reference, as
    /// one consistent snapshot for a single calculation pass.
    async fn snapshot_for_lines(&self, lines: &[LineItem]) -> Result<PricingSnapshot>;

    /// Single-item lookup for the write path (category pre-resolved
    /// through the sub-element chain).
    async fn get_cost_item(&self, cost_item_id: CostItemId) -> Result<Option<CostCatalogItem>>;

    async fn get_category(&self, category_id: CategoryId) -> Result<Option<CategoryRef>>;
}
