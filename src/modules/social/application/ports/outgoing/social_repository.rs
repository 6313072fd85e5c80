// src/modules/social/application/ports/outgoing/social_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::social::application::domain::social_media::SocialMediaCommand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaResult {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "GitHub")]
    pub name: String,
    #[schema(example = "https://github.com/ada")]
    pub url: String,
    #[schema(example = "")]
    pub icon: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocialRepositoryError {
    #[error("Social media link not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SocialRepository: Send + Sync {
    /// Descending id order: newest first.
    async fn list(&self) -> Result<Vec<SocialMediaResult>, SocialRepositoryError>;

    async fn get(&self, id: i32) -> Result<SocialMediaResult, SocialRepositoryError>;

    async fn create(
        &self,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, SocialRepositoryError>;

    async fn update(
        &self,
        id: i32,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, SocialRepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), SocialRepositoryError>;
}
