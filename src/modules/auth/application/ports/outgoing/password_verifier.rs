use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(false)` for a wrong password, `Err` for an unreadable hash.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
