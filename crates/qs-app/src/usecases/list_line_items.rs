use anyhow::Result;
use std::sync::Arc;

use qs_core::estimate::LineItem;
use qs_core::ids::ProjectId;
use qs_core::ports::LineItemRepositoryPort;
use qs_core::EstimateConfig;

/// Use case for the cheap paginated line list.
///
/// This is the one read path allowed to surface the cached `line_total`
/// without recomputation; anything producing subtotals or export output
/// must go through the summary use case instead.
pub struct ListLineItems {
    line_item_repo: Arc<dyn LineItemRepositoryPort>,
    max_limit: u64,
}

impl ListLineItems {
    pub fn new(line_item_repo: Arc<dyn LineItemRepositoryPort>, config: &EstimateConfig) -> Self {
        Self {
            line_item_repo,
            max_limit: config.max_line_items_per_page,
        }
    }

    pub async fn execute(
        &self,
        project_id: ProjectId,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<LineItem>> {
        if limit == 0 {
            anyhow::bail!("invalid limit: {limit}, must be at least 1");
        }
        if limit > self.max_limit {
            anyhow::bail!("invalid limit: {limit}, must be at most {}", self.max_limit);
        }

        self.line_item_repo
            .list_active_page(project_id, limit as i64, offset as i64)
            .await
    }
}
