use async_trait::async_trait;

use crate::modules::social::application::ports::incoming::use_cases::{
    GetSocialsError, GetSocialsUseCase,
};
use crate::modules::social::application::ports::outgoing::{SocialMediaResult, SocialRepository};

pub struct GetSocialsService<R>
where
    R: SocialRepository,
{
    repository: R,
}

impl<R> GetSocialsService<R>
where
    R: SocialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSocialsUseCase for GetSocialsService<R>
where
    R: SocialRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SocialMediaResult>, GetSocialsError> {
        self.repository
            .list()
            .await
            .map_err(GetSocialsError::from)
    }
}
