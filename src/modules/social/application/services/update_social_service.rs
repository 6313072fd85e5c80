use async_trait::async_trait;

use crate::modules::social::application::domain::social_media::SocialMediaCommand;
use crate::modules::social::application::ports::incoming::use_cases::{
    UpdateSocialError, UpdateSocialUseCase,
};
use crate::modules::social::application::ports::outgoing::{SocialMediaResult, SocialRepository};

pub struct UpdateSocialService<R>
where
    R: SocialRepository,
{
    repository: R,
}

impl<R> UpdateSocialService<R>
where
    R: SocialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSocialUseCase for UpdateSocialService<R>
where
    R: SocialRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, UpdateSocialError> {
        self.repository
            .update(id, command)
            .await
            .map_err(UpdateSocialError::from)
    }
}
