use async_trait::async_trait;

use crate::modules::social::application::domain::social_media::SocialMediaCommand;
use crate::modules::social::application::ports::outgoing::{
    SocialMediaResult, SocialRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSocialError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SocialRepositoryError> for CreateSocialError {
    fn from(err: SocialRepositoryError) -> Self {
        CreateSocialError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait CreateSocialUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, CreateSocialError>;
}
