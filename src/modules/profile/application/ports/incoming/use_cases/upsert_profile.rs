use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::{
    ProfileData, ProfileRepositoryError, ProfileResult,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for UpsertProfileError {
    fn from(err: ProfileRepositoryError) -> Self {
        UpsertProfileError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Destructive full replace: fields missing from `data` were already
/// defaulted by the caller and overwrite whatever is stored.
#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(&self, data: ProfileData) -> Result<ProfileResult, UpsertProfileError>;
}
