use async_trait::async_trait;

use crate::modules::social::application::ports::incoming::use_cases::{
    DeleteSocialError, DeleteSocialUseCase,
};
use crate::modules::social::application::ports::outgoing::SocialRepository;

pub struct DeleteSocialService<R>
where
    R: SocialRepository,
{
    repository: R,
}

impl<R> DeleteSocialService<R>
where
    R: SocialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSocialUseCase for DeleteSocialService<R>
where
    R: SocialRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteSocialError> {
        Ok(self.repository.delete(id).await?)
    }
}
