use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    PatchProfileError, PatchProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    PatchProfileData, ProfileRepository, ProfileResult,
};

pub struct PatchProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> PatchProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchProfileUseCase for PatchProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, data: PatchProfileData) -> Result<ProfileResult, PatchProfileError> {
        // Nothing to write: answer with the current record
        if data.is_empty() {
            return Ok(self.repository.get_or_create().await?);
        }

        Ok(self.repository.patch(data).await?)
    }
}
