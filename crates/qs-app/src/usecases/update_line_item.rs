use std::sync::Arc;

use rust_decimal::Decimal;

use qs_core::estimate::{
    EstimateError, LineItem, LineItemOrigin, LineItemPatch, LineItemValidationError,
};
use qs_core::ids::LineItemId;
use qs_core::ports::{CatalogRepositoryPort, LineItemRepositoryPort};

use crate::usecases::pricing::price_line;

/// Use case for editing a line item. Only quantity, the material unit cost
/// override and notes are mutable; origin, description and category are
/// fixed at creation. Every accepted patch reprices the line and bumps its
/// version number.
pub struct UpdateLineItem {
    line_item_repo: Arc<dyn LineItemRepositoryPort>,
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl UpdateLineItem {
    pub fn new(
        line_item_repo: Arc<dyn LineItemRepositoryPort>,
        catalog_repo: Arc<dyn CatalogRepositoryPort>,
    ) -> Self {
        Self {
            line_item_repo,
            catalog_repo,
        }
    }

    pub async fn execute(
        &self,
        line_item_id: LineItemId,
        patch: LineItemPatch,
    ) -> Result<LineItem, EstimateError> {
        let mut line = self
            .line_item_repo
            .get(line_item_id)
            .await?
            .filter(|line| line.is_active)
            .ok_or(EstimateError::LineItemNotFound(line_item_id))?;

        if patch.is_empty() {
            return Ok(line);
        }

        if let Some(quantity) = patch.quantity {
            if quantity <= Decimal::ZERO {
                return Err(LineItemValidationError::QuantityNotPositive(quantity).into());
            }
            line.quantity = quantity;
        }

        if let Some(new_override) = patch.unit_cost_override {
            match &mut line.origin {
                LineItemOrigin::Catalog {
                    unit_cost_override, ..
                } => {
                    if let Some(cost) = new_override {
                        if cost < Decimal::ZERO {
                            return Err(LineItemValidationError::NegativeOverride(cost).into());
                        }
                    }
                    *unit_cost_override = new_override;
                }
                LineItemOrigin::Custom { .. } => {
                    return Err(LineItemValidationError::OverrideOnCustomLine.into());
                }
            }
        }

        if let Some(notes) = patch.notes {
            line.notes = notes;
        }

        line.line_total = price_line(&self.catalog_repo, &line).await?;
        line.version_number += 1;

        self.line_item_repo.update(&line).await?;
        tracing::info!(
            line_item_id = %line.line_item_id,
            version = line.version_number,
            line_total = %line.line_total,
            "updated estimate line item"
        );
        Ok(line)
    }
}
