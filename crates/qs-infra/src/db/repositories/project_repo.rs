use anyhow::Result;
use diesel::prelude::*;

use qs_core::estimate::Project;
use qs_core::ids::ProjectId;
use qs_core::ports::ProjectRepositoryPort;

use crate::db::mapper::project_mapper;
use crate::db::models::ProjectRow;
use crate::db::executor::DbExecutor;
use crate::db::schema::t_project;

pub struct DieselProjectRepository<E> {
    executor: E,
}

impl<E> DieselProjectRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl<E: DbExecutor> ProjectRepositoryPort for DieselProjectRepository<E> {
    async fn get_project(&self, project_id: ProjectId) -> Result<Option<Project>> {
        self.executor.run(|conn| {
            let row = t_project::table
                .filter(t_project::id.eq(project_id.inner()))
                .first::<ProjectRow>(conn)
                .optional()?;

            row.as_ref().map(project_mapper::to_domain).transpose()
        })
    }
}
