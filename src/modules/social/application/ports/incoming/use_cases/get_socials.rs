use async_trait::async_trait;

use crate::modules::social::application::ports::outgoing::{
    SocialMediaResult, SocialRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSocialsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SocialRepositoryError> for GetSocialsError {
    fn from(err: SocialRepositoryError) -> Self {
        GetSocialsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetSocialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SocialMediaResult>, GetSocialsError>;
}
