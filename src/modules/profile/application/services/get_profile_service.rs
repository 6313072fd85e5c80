use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileRepository, ProfileResult};

#[derive(Debug, Clone)]
pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ProfileResult, GetProfileError> {
        self.repository
            .get_or_create()
            .await
            .map_err(GetProfileError::from)
    }
}
