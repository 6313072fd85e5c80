use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectVisibility,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<ProjectResult, GetSingleProjectError> {
        self.query
            .get_project(project_id, ProjectVisibility::All)
            .await
            .map_err(GetSingleProjectError::from)
    }
}
