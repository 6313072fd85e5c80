use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ProjectQueryError> for GetSingleProjectError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            other => GetSingleProjectError::QueryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<ProjectResult, GetSingleProjectError>;
}
