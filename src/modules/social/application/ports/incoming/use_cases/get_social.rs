use async_trait::async_trait;

use crate::modules::social::application::ports::outgoing::{
    SocialMediaResult, SocialRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSocialError {
    #[error("Social media link not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SocialRepositoryError> for GetSocialError {
    fn from(err: SocialRepositoryError) -> Self {
        match err {
            SocialRepositoryError::NotFound => GetSocialError::NotFound,
            SocialRepositoryError::DatabaseError(msg) => GetSocialError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait GetSocialUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<SocialMediaResult, GetSocialError>;
}
