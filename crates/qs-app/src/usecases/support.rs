//! Shared in-memory fake store for use-case tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use qs_core::estimate::{
    CategoryRef, CostCatalogItem, LineItem, LineItemOrigin, NewLineItem, PricingSnapshot,
    Project, UnitRef,
};
use qs_core::ids::{CategoryId, CostItemId, LineItemId, ProjectId};
use qs_core::ports::{CatalogRepositoryPort, LineItemRepositoryPort, ProjectRepositoryPort};

pub(crate) struct InMemoryEstimateStore {
    projects: Vec<Project>,
    cost_items: Vec<CostCatalogItem>,
    categories: Vec<CategoryRef>,
    lines: Mutex<Vec<LineItem>>,
    next_line_id: AtomicI64,
}

impl InMemoryEstimateStore {
    /// Project 1 (10% contingency, no floor area) plus two catalog items:
    /// id 1 = material 100 / management 5 / waste 1.1 in category 10,
    /// id 2 = material 40 / management 2 / contractor 30 (required) in
    /// category 20.
    pub(crate) fn with_fixture() -> Arc<Self> {
        let category_10 = CategoryRef {
            category_id: Some(CategoryId::new(10)),
            code: "SUB".to_string(),
            name: "Substructure".to_string(),
        };
        let category_20 = CategoryRef {
            category_id: Some(CategoryId::new(20)),
            code: "ROOF".to_string(),
            name: "Roofing".to_string(),
        };

        Arc::new(Self {
            projects: vec![Project {
                project_id: ProjectId::new(1),
                name: "Community hall".to_string(),
                floor_area_m2: None,
                contingency_percentage: dec!(10),
                created_at: Utc::now(),
            }],
            cost_items: vec![
                CostCatalogItem {
                    cost_item_id: CostItemId::new(1),
                    code: "CI-1".to_string(),
                    description: "Concrete strip foundation".to_string(),
                    unit: UnitRef {
                        code: "m3".to_string(),
                        name: "cubic metre".to_string(),
                    },
                    material_cost: dec!(100),
                    management_cost: dec!(5),
                    contractor_cost: dec!(0),
                    is_contractor_required: false,
                    waste_factor: dec!(1.1),
                    category: category_10.clone(),
                },
                CostCatalogItem {
                    cost_item_id: CostItemId::new(2),
                    code: "CI-2".to_string(),
                    description: "Roof truss installation".to_string(),
                    unit: UnitRef {
                        code: "nr".to_string(),
                        name: "number".to_string(),
                    },
                    material_cost: dec!(40),
                    management_cost: dec!(2),
                    contractor_cost: dec!(30),
                    is_contractor_required: true,
                    waste_factor: dec!(1.0),
                    category: category_20.clone(),
                },
            ],
            categories: vec![category_10, category_20],
            lines: Mutex::new(Vec::new()),
            next_line_id: AtomicI64::new(1),
        })
    }

    pub(crate) fn seed_line(
        &self,
        origin: LineItemOrigin,
        quantity: Decimal,
        cached_total: Decimal,
    ) -> LineItemId {
        let id = LineItemId::new(self.next_line_id.fetch_add(1, Ordering::SeqCst));
        self.lines.lock().unwrap().push(LineItem {
            line_item_id: id,
            project_id: ProjectId::new(1),
            quantity,
            origin,
            notes: None,
            nrm2_code: None,
            is_active: true,
            version_number: 1,
            created_by: None,
            created_at: Utc::now(),
            line_total: cached_total,
        });
        id
    }

    pub(crate) fn line(&self, line_item_id: LineItemId) -> Option<LineItem> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .find(|line| line.line_item_id == line_item_id)
            .cloned()
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryPort for InMemoryEstimateStore {
    async fn get_project(&self, project_id: ProjectId) -> Result<Option<Project>> {
        Ok(self
            .projects
            .iter()
            .find(|project| project.project_id == project_id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl LineItemRepositoryPort for InMemoryEstimateStore {
    async fn list_active(&self, project_id: ProjectId) -> Result<Vec<LineItem>> {
        Ok(self
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.project_id == project_id && line.is_active)
            .cloned()
            .collect())
    }

    async fn list_active_page(
        &self,
        project_id: ProjectId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LineItem>> {
        Ok(self
            .list_active(project_id)
            .await?
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn get(&self, line_item_id: LineItemId) -> Result<Option<LineItem>> {
        Ok(self.line(line_item_id))
    }

    async fn insert(&self, draft: &NewLineItem, line_total: Decimal) -> Result<LineItem> {
        let id = LineItemId::new(self.next_line_id.fetch_add(1, Ordering::SeqCst));
        let line = LineItem {
            line_item_id: id,
            project_id: draft.project_id,
            quantity: draft.quantity,
            origin: draft.origin.clone(),
            notes: draft.notes.clone(),
            nrm2_code: draft.nrm2_code.clone(),
            is_active: true,
            version_number: 1,
            created_by: draft.created_by.clone(),
            created_at: Utc::now(),
            line_total,
        };
        self.lines.lock().unwrap().push(line.clone());
        Ok(line)
    }

    async fn update(&self, updated: &LineItem) -> Result<()> {
        let mut lines = self.lines.lock().unwrap();
        if let Some(line) = lines
            .iter_mut()
            .find(|line| line.line_item_id == updated.line_item_id)
        {
            *line = updated.clone();
        }
        Ok(())
    }

    async fn soft_delete(&self, line_item_id: LineItemId) -> Result<bool> {
        let mut lines = self.lines.lock().unwrap();
        match lines
            .iter_mut()
            .find(|line| line.line_item_id == line_item_id && line.is_active)
        {
            Some(line) => {
                line.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait::async_trait]
impl CatalogRepositoryPort for InMemoryEstimateStore {
    async fn snapshot_for_lines(&self, _lines: &[LineItem]) -> Result<PricingSnapshot> {
        Ok(PricingSnapshot::from_parts(
            self.cost_items.clone(),
            self.categories.clone(),
        ))
    }

    async fn get_cost_item(
        &self,
        cost_item_id: CostItemId,
    ) -> Result<Option<CostCatalogItem>> {
        Ok(self
            .cost_items
            .iter()
            .find(|item| item.cost_item_id == cost_item_id)
            .cloned())
    }

    async fn get_category(&self, category_id: CategoryId) -> Result<Option<CategoryRef>> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.category_id == Some(category_id))
            .cloned())
    }
}
