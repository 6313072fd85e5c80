use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{DEFAULT_STATUS, MAX_TITLE_LEN};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepositoryError, ProjectResult,
};

// ========================= Command =========================

/// Validated project record, used by both create and full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectCommand {
    data: ProjectData, // Private - title and description guaranteed non-blank
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProjectCommandError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title must be at most 200 characters")]
    TitleTooLong,

    #[error("Description is required")]
    EmptyDescription,
}

impl CreateProjectCommand {
    pub fn new(mut data: ProjectData) -> Result<Self, CreateProjectCommandError> {
        if data.title.trim().is_empty() {
            return Err(CreateProjectCommandError::EmptyTitle);
        }

        if data.title.chars().count() > MAX_TITLE_LEN {
            return Err(CreateProjectCommandError::TitleTooLong);
        }

        if data.description.trim().is_empty() {
            return Err(CreateProjectCommandError::EmptyDescription);
        }

        if data.status.trim().is_empty() {
            data.status = DEFAULT_STATUS.to_string();
        }

        data.github = non_blank(data.github);
        data.demo = non_blank(data.demo);

        Ok(Self { data })
    }

    pub fn data(&self) -> &ProjectData {
        &self.data
    }

    pub fn into_data(self) -> ProjectData {
        self.data
    }
}

fn non_blank(link: Option<String>) -> Option<String> {
    link.filter(|l| !l.trim().is_empty())
}

// ========================= Errors =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for CreateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        CreateProjectError::RepositoryError(err.to_string())
    }
}

// ========================= Use case =========================

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError>;
}
