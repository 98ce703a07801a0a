use std::sync::Arc;

use serde::{Deserialize, Serialize};

use qs_core::estimate::{calculate, EstimateError, Project, ProjectEstimateTotals};
use qs_core::ids::ProjectId;
use qs_core::ports::{CatalogRepositoryPort, LineItemRepositoryPort, ProjectRepositoryPort};

/// What the summary endpoint, PDF export and dashboards consume. All three
/// read this exact structure so they cannot diverge numerically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub project: Project,
    pub estimate: ProjectEstimateTotals,
}

/// Use case for the project estimate summary: the authoritative read path.
///
/// Always recomputes through the normalizer from the current line items and
/// a fresh catalog snapshot; the cached per-line totals are never trusted
/// here.
pub struct GetEstimateSummary {
    project_repo: Arc<dyn ProjectRepositoryPort>,
    line_item_repo: Arc<dyn LineItemRepositoryPort>,
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl GetEstimateSummary {
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

    pub async fn execute(&self, project_id: ProjectId) -> Result<EstimateSummary, EstimateError> {
        let project = self
            .project_repo
            .get_project(project_id)
            .await?
            .ok_or(EstimateError::ProjectNotFound(project_id))?;

        let lines = self.line_item_repo.list_active(project_id).await?;
        let snapshot = self.catalog_repo.snapshot_for_lines(&lines).await?;

        let estimate = calculate(&project, &lines, &snapshot);
        tracing::debug!(
            project_id = %project_id,
            line_count = lines.len(),
            unresolved = estimate.unresolved_lines.len(),
            "computed estimate summary"
        );

        Ok(EstimateSummary { project, estimate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::support::InMemoryEstimateStore;
    use qs_core::estimate::LineItemOrigin;
    use qs_core::ids::{CategoryId, CostItemId};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn returns_not_found_for_unknown_project() {
        let store = InMemoryEstimateStore::with_fixture();
        let usecase = GetEstimateSummary::new(store.clone(), store.clone(), store);

        let err = usecase.execute(ProjectId::new(404)).await.unwrap_err();
        assert!(matches!(err, EstimateError::ProjectNotFound(id) if id == ProjectId::new(404)));
    }

    #[tokio::test]
    async fn empty_project_gives_zero_summary() {
        let store = InMemoryEstimateStore::with_fixture();
        let usecase = GetEstimateSummary::new(store.clone(), store.clone(), store);

        let summary = usecase.execute(ProjectId::new(1)).await.unwrap();
        assert_eq!(summary.estimate.subtotal, dec!(0));
        assert!(summary.estimate.categories.is_empty());
    }

    #[tokio::test]
    async fn summary_recomputes_instead_of_trusting_cached_totals() {
        let store = InMemoryEstimateStore::with_fixture();
        store.seed_line(
            LineItemOrigin::Catalog {
                cost_item_id: CostItemId::new(1),
                unit_cost_override: Some(dec!(50)),
            },
            dec!(2),
            dec!(99999), // deliberately wrong cache
        );

        let usecase = GetEstimateSummary::new(store.clone(), store.clone(), store);
        let summary = usecase.execute(ProjectId::new(1)).await.unwrap();

        // 50 x 2 x 1.1 + 5 x 2 = 120, regardless of the cached value.
        assert_eq!(summary.estimate.subtotal, dec!(120.0));
        assert_eq!(summary.estimate.grand_total, dec!(132.00)); // 10% contingency
    }

    #[tokio::test]
    async fn summary_flags_unresolved_catalog_references() {
        let store = InMemoryEstimateStore::with_fixture();
        store.seed_line(
            LineItemOrigin::Catalog {
                cost_item_id: CostItemId::new(777),
                unit_cost_override: None,
            },
            dec!(1),
            dec!(0),
        );
        store.seed_line(
            LineItemOrigin::Custom {
                description: "Waste removal".to_string(),
                unit_rate: dec!(30),
                unit: "nr".to_string(),
                category_id: CategoryId::new(10),
            },
            dec!(2),
            dec!(60),
        );

        let usecase = GetEstimateSummary::new(store.clone(), store.clone(), store);
        let summary = usecase.execute(ProjectId::new(1)).await.unwrap();

        assert_eq!(summary.estimate.unresolved_lines.len(), 1);
        assert_eq!(summary.estimate.subtotal, dec!(60));
    }

    #[tokio::test]
    async fn repeated_reads_are_identical_without_writes() {
        let store = InMemoryEstimateStore::with_fixture();
        store.seed_line(
            LineItemOrigin::Catalog {
                cost_item_id: CostItemId::new(2),
                unit_cost_override: None,
            },
            dec!(3),
            dec!(0),
        );

        let usecase = GetEstimateSummary::new(store.clone(), store.clone(), store.clone());
        let first = usecase.execute(ProjectId::new(1)).await.unwrap();
        let second = usecase.execute(ProjectId::new(1)).await.unwrap();

        assert_eq!(first, second);
    }
}
