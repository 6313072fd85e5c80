use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_archiver::ProjectArchiverError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HardDeleteProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectArchiverError> for HardDeleteProjectError {
    fn from(err: ProjectArchiverError) -> Self {
        match err {
            ProjectArchiverError::NotFound => Self::ProjectNotFound,
            ProjectArchiverError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

/// Removes a project permanently. A second delete of the same id is `ProjectNotFound`.
#[async_trait]
pub trait HardDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<(), HardDeleteProjectError>;
}
