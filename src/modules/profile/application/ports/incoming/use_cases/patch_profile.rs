use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::{
    PatchProfileData, ProfileRepositoryError, ProfileResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for PatchProfileError {
    fn from(err: ProfileRepositoryError) -> Self {
        PatchProfileError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait PatchProfileUseCase: Send + Sync {
    async fn execute(&self, data: PatchProfileData) -> Result<ProfileResult, PatchProfileError>;
}
