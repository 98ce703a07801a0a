use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use qs_core::estimate::{EstimateError, LineItem, NewLineItem};
use qs_core::ids::LineItemId;
use qs_core::ports::{CatalogRepositoryPort, LineItemRepositoryPort, ProjectRepositoryPort};

use crate::usecases::pricing::price_line;

/// Use case for adding a line item, catalog-sourced or custom.
///
/// Validates the draft, prices it through the normalizer and persists the
/// computed total, so the next summary read reflects the write.
pub struct AddLineItem {
    project_repo: Arc<dyn ProjectRepositoryPort>,
    line_item_repo: Arc<dyn LineItemRepositoryPort>,
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl AddLineItem {
    pub fn new(
        project_repo: Arc<dyn ProjectRepositoryPort>,
        line_item_repo: Arc<dyn LineItemRepositoryPort>,
        catalog_repo: Arc<dyn CatalogRepositoryPort>,
    ) -> Self {
        Self {
            project_repo,
            line_item_repo,
            catalog_repo,
        }
    }

    pub async fn execute(&self, draft: NewLineItem) -> Result<LineItem, EstimateError> {
        draft.validate()?;

        self.project_repo
            .get_project(draft.project_id)
            .await?
            .ok_or(EstimateError::ProjectNotFound(draft.project_id))?;

        // Provisional line, priced before it has an id.
        let provisional = LineItem {
            line_item_id: LineItemId::new(0),
            project_id: draft.project_id,
            quantity: draft.quantity,
            origin: draft.origin.clone(),
            notes: draft.notes.clone(),
            nrm2_code: draft.nrm2_code.clone(),
            is_active: true,
            version_number: 1,
            created_by: draft.created_by.clone(),
            created_at: Utc::now(),
            line_total: Decimal::ZERO,
        };
        let line_total = price_line(&self.catalog_repo, &provisional).await?;

        let stored = self.line_item_repo.insert(&draft, line_total).await?;
        tracing::info!(
            project_id = %stored.project_id,
            line_item_id = %stored.line_item_id,
            line_total = %stored.line_total,
            "added estimate line item"
        );
        Ok(stored)
    }
}
