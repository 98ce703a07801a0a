//! Write-time pricing through the single normalizer entry point.
//!
//! Mutation use cases must persist a `line_total` computed by exactly the
//! same formulas the read path uses, so the cached value and a fresh
//! recomputation can only diverge by staleness, never by formula.

use std::sync::Arc;

use rust_decimal::Decimal;

use qs_core::estimate::{normalize, EstimateError, LineItem, LineItemOrigin, NormalizeError};
use qs_core::estimate::PricingSnapshot;
use qs_core::ports::CatalogRepositoryPort;

/// Resolves the pricing inputs one line needs and returns its normalized
/// total. Fails when a catalog-sourced line points at a cost item that no
/// longer exists; a write against a vanished item is refused outright.
pub(crate) async fn price_line(
    catalog_repo: &Arc<dyn CatalogRepositoryPort>,
    line: &LineItem,
) -> Result<Decimal, EstimateError> {
    let snapshot = match &line.origin {
        LineItemOrigin::Catalog { cost_item_id, .. } => {
            let item = catalog_repo
                .get_cost_item(*cost_item_id)
                .await?
                .ok_or(EstimateError::MissingCatalogItem(*cost_item_id))?;
            PricingSnapshot::from_parts(vec![item], vec![])
        }
        LineItemOrigin::Custom { category_id, .. } => {
            // A missing category does not block the write; the line will
            // group under the uncategorized bucket on the read path.
            let categories = catalog_repo
                .get_category(*category_id)
                .await?
                .into_iter()
                .collect();
            PricingSnapshot::from_parts(vec![], categories)
        }
    };

    let computed = normalize(line, &snapshot).map_err(|err| match err {
        NormalizeError::MissingCatalogReference { cost_item_id, .. } => {
            EstimateError::MissingCatalogItem(cost_item_id)
        }
    })?;

    Ok(computed.line_total)
}
