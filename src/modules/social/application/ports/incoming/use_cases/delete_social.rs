use async_trait::async_trait;

use crate::modules::social::application::ports::outgoing::SocialRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSocialError {
    #[error("Social media link not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SocialRepositoryError> for DeleteSocialError {
    fn from(err: SocialRepositoryError) -> Self {
        match err {
            SocialRepositoryError::NotFound => DeleteSocialError::NotFound,
            SocialRepositoryError::DatabaseError(msg) => DeleteSocialError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteSocialUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteSocialError>;
}
