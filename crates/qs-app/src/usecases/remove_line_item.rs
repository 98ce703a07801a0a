use std::sync::Arc;

use qs_core::estimate::EstimateError;
use qs_core::ids::LineItemId;
use qs_core::ports::LineItemRepositoryPort;

/// Use case for removing a line item. Lines are soft-deleted so prior
/// estimate versions stay auditable; the next summary read simply no
/// longer sees the line.
pub struct RemoveLineItem {
    line_item_repo: Arc<dyn LineItemRepositoryPort>,
}

impl RemoveLineItem {
    pub fn new(line_item_repo: Arc<dyn LineItemRepositoryPort>) -> Self {
        Self { line_item_repo }
    }

    pub async fn execute(&self, line_item_id: LineItemId) -> Result<(), EstimateError> {
        let deleted = self.line_item_repo.soft_delete(line_item_id).await?;
        if !deleted {
            return Err(EstimateError::LineItemNotFound(line_item_id));
        }
        tracing::info!(line_item_id = %line_item_id, "soft-deleted estimate line item");
        Ok(())
    }
}
