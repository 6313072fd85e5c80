use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::auth::application::domain::{AdminCredentials, LoginRequest};
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginError, LoginResult, LoginUseCase,
};
use crate::modules::auth::application::ports::outgoing::{PasswordVerifier, TokenProvider};

/// Checks a login against the configured admin account and issues a session token.
pub struct LoginService<V, T>
where
    V: PasswordVerifier,
    T: TokenProvider,
{
    credentials: AdminCredentials,
    verifier: V,
    tokens: T,
}

impl<V, T> LoginService<V, T>
where
    V: PasswordVerifier,
    T: TokenProvider,
{
    pub fn new(credentials: AdminCredentials, verifier: V, tokens: T) -> Self {
        Self {
            credentials,
            verifier,
            tokens,
        }
    }
}

#[async_trait]
impl<V, T> LoginUseCase for LoginService<V, T>
where
    V: PasswordVerifier + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError> {
        if request.email() != self.credentials.email() {
            warn!(email = %request.email(), "Rejected login for unknown email");
            return Err(LoginError::InvalidCredentials);
        }

        let is_valid = self
            .verifier
            .verify_password(request.password(), self.credentials.password_hash())
            .await?;

        if !is_valid {
            warn!(email = %request.email(), "Rejected login with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let issued = self.tokens.issue_session_token(self.credentials.email())?;

        info!(email = %self.credentials.email(), "Admin session issued");

        Ok(LoginResult {
            token: issued.token,
            email: self.credentials.email().to_string(),
            expires_at: issued.expires_at,
        })
    }
}
