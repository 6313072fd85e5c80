use async_trait::async_trait;

use super::create_project::CreateProjectCommand;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepositoryError, ProjectResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for UpdateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => UpdateProjectError::ProjectNotFound,
            other => UpdateProjectError::RepositoryError(other.to_string()),
        }
    }
}

/// Full-record replace. Fields not in the command are reset to their defaults.
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i32,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError>;
}
