use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        GetProjectsError::QueryError(err.to_string())
    }
}

/// Dashboard listing, drafts included.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError>;
}

/// Public listing, published projects only.
#[async_trait]
pub trait GetPublicProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError>;
}
