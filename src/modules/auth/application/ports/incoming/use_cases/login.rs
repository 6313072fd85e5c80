use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::auth::application::domain::LoginRequest;
use crate::modules::auth::application::ports::outgoing::{HashError, TokenError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<HashError> for LoginError {
    fn from(err: HashError) -> Self {
        LoginError::PasswordVerificationFailed(err.to_string())
    }
}

impl From<TokenError> for LoginError {
    fn from(err: TokenError) -> Self {
        LoginError::TokenGenerationFailed(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    /// Signed session token (HS256 JWT)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError>;
}
