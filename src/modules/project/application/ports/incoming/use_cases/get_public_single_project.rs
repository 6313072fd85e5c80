use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

pub use super::get_single_project::GetSingleProjectError as GetPublicSingleProjectError;

/// An unpublished project is reported as `NotFound`.
#[async_trait]
pub trait GetPublicSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32)
        -> Result<ProjectResult, GetPublicSingleProjectError>;
}
