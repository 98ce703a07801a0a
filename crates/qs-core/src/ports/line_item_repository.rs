use anyhow::Result;
use rust_decimal::Decimal;

use crate::estimate::{LineItem, NewLineItem};
use crate::ids::{LineItemId, ProjectId};

#[async_trait::async_trait]
pub trait LineItemRepositoryPort: Send + Sync {
    /// All active (not soft-deleted) lines of a project, in insertion
    /// order. Rows violating the origin invariant are logged and skipped
    /// by the implementation.
    async fn list_active(&self, project_id: ProjectId) -> Result<Vec<LineItem>>;

    /// A page of active lines for cheap list views (cached totals).
    async fn list_active_page(
        &self,
        project_id: ProjectId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LineItem>>;

    async fn get(&self, line_item_id: LineItemId) -> Result<Option<LineItem>>;

    /// Persists a new line with its write-time computed total.
    async fn insert(&self, draft: &NewLineItem, line_total: Decimal) -> Result<LineItem>;

    /// Persists the mutable fields of an updated line (quantity, override,
    /// notes, recomputed total, bumped version).
    async fn update(&self, line: &LineItem) -> Result<()>;

    /// Soft delete; returns false when no active line matched.
    async fn soft_delete(&self, line_item_id: LineItemId) -> Result<bool>;
}
