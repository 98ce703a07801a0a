use crate::estimate::line_item::LineItemValidationError;
use crate::ids::{CostItemId, LineItemId, ProjectId};

/// Failures surfaced to the callers of the estimate use cases.
///
/// Row-level data issues (invalid origin rows, missing catalog references
/// on the read path) are recovered locally and never reach here; one bad
/// row must not make a project's estimate unviewable.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// 404-equivalent, not retried.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("line item {0} not found")]
    LineItemNotFound(LineItemId),

    /// Write-time only: refusing to create or reprice a line against a
    /// catalog item that no longer exists.
    #[error("cost item {0} not found in catalog")]
    MissingCatalogItem(CostItemId),

    #[error(transparent)]
    Validation(#[from] LineItemValidationError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
