use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetPublicProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectVisibility,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

pub struct GetPublicProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetPublicProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicProjectsUseCase for GetPublicProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
        Ok(self
            .query
            .list_projects(ProjectVisibility::PublishedOnly)
            .await?)
    }
}
