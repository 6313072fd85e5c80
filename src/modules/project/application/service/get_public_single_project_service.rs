use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetPublicSingleProjectError, GetPublicSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectVisibility,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

pub struct GetPublicSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetPublicSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicSingleProjectUseCase for GetPublicSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i32,
    ) -> Result<ProjectResult, GetPublicSingleProjectError> {
        Ok(self
            .query
            .get_project(project_id, ProjectVisibility::PublishedOnly)
            .await?)
    }
}
