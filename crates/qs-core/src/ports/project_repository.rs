use anyhow::Result;

use crate::estimate::Project;
use crate::ids::ProjectId;

#[async_trait::async_trait]
pub trait ProjectRepositoryPort: Send + Sync {
    /// Returns the project's metadata, `None` when it does not exist.
    async fn get_project(&self, project_id: ProjectId) -> Result<Option<Project>>;
}
