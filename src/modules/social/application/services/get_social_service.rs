use async_trait::async_trait;

use crate::modules::social::application::ports::incoming::use_cases::{
    GetSocialError, GetSocialUseCase,
};
use crate::modules::social::application::ports::outgoing::{SocialMediaResult, SocialRepository};

pub struct GetSocialService<R>
where
    R: SocialRepository,
{
    repository: R,
}

impl<R> GetSocialService<R>
where
    R: SocialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSocialUseCase for GetSocialService<R>
where
    R: SocialRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<SocialMediaResult, GetSocialError> {
        Ok(self.repository.get(id).await?)
    }
}
