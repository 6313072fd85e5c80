use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::{
    ProfileRepositoryError, ProfileResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for GetProfileError {
    fn from(err: ProfileRepositoryError) -> Self {
        GetProfileError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileResult, GetProfileError>;
}
