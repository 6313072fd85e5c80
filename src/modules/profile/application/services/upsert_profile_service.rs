use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileData, ProfileRepository, ProfileResult,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpsertProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpsertProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertProfileUseCase for UpsertProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, data: ProfileData) -> Result<ProfileResult, UpsertProfileError> {
        let profile = self.repository.upsert(data).await?;
        info!("Profile replaced (updated_at={})", profile.updated_at);
        Ok(profile)
    }
}
