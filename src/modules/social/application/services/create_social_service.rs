use async_trait::async_trait;
use tracing::info;

use crate::modules::social::application::domain::social_media::SocialMediaCommand;
use crate::modules::social::application::ports::incoming::use_cases::{
    CreateSocialError, CreateSocialUseCase,
};
use crate::modules::social::application::ports::outgoing::{SocialMediaResult, SocialRepository};

pub struct CreateSocialService<R>
where
    R: SocialRepository,
{
    repository: R,
}

impl<R> CreateSocialService<R>
where
    R: SocialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSocialUseCase for CreateSocialService<R>
where
    R: SocialRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, CreateSocialError> {
        let created = self.repository.create(command).await?;
        info!("Social link {} ({}) created", created.id, created.name);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemorySocialRepository;

    fn github() -> SocialMediaCommand {
        SocialMediaCommand::new(
            Some("GitHub".to_string()),
            Some("https://github.com/x".to_string()),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemorySocialRepository::default();
        let service = CreateSocialService::new(repo.clone());

        let first = service.execute(github()).await.unwrap();
        let second = service.execute(github()).await.unwrap();

        assert_eq!(first.icon, "");
        assert!(second.id > first.id);
        assert_eq!(repo.calls(), 2);
    }

    #[tokio::test]
    async fn test_create_repository_error() {
        let service = CreateSocialService::new(InMemorySocialRepository::failing());

        let result = service.execute(github()).await;

        assert!(matches!(result, Err(CreateSocialError::RepositoryError(_))));
    }
}
