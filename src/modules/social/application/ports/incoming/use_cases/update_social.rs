use async_trait::async_trait;

use crate::modules::social::application::domain::social_media::SocialMediaCommand;
use crate::modules::social::application::ports::outgoing::{
    SocialMediaResult, SocialRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSocialError {
    #[error("Social media link not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SocialRepositoryError> for UpdateSocialError {
    fn from(err: SocialRepositoryError) -> Self {
        match err {
            SocialRepositoryError::NotFound => UpdateSocialError::NotFound,
            SocialRepositoryError::DatabaseError(msg) => UpdateSocialError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UpdateSocialUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, UpdateSocialError>;
}
