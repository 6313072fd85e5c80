use tracing::{info, warn};

use crate::client::api_client::PortfolioClient;
use crate::client::error::ClientError;
use crate::client::storage::SessionStorage;

pub const KEY_IS_AUTHENTICATED: &str = "isAuthenticated";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_SESSION_TOKEN: &str = "sessionToken";

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated { email: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Storage has not been read yet.
    Wait,
    Redirect(String),
}

/// Dashboard access state, persisted across restarts through a [`SessionStorage`].
///
/// The persisted flag only gates rendering. The server trusts nothing but
/// the session token.
pub struct AuthGate<S>
where
    S: SessionStorage,
{
    storage: S,
    state: AuthState,
    token: Option<String>,
    is_loading: bool,
}

impl<S> AuthGate<S>
where
    S: SessionStorage,
{
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: AuthState::Unauthenticated,
            token: None,
            is_loading: true,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { email } => Some(email),
            AuthState::Unauthenticated => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Re-reads the persisted session. Call once at start-up.
    pub fn restore(&mut self) -> Result<&AuthState, ClientError> {
        let flag = self.storage.get(KEY_IS_AUTHENTICATED)?;
        let email = self.storage.get(KEY_USER_EMAIL)?;

        self.state = match (flag.as_deref(), email) {
            (Some("true"), Some(email)) if !email.is_empty() => {
                self.token = self.storage.get(KEY_SESSION_TOKEN)?;
                AuthState::Authenticated { email }
            }
            _ => AuthState::Unauthenticated,
        };
        self.is_loading = false;

        Ok(&self.state)
    }

    /// Returns `Ok(false)` when the server rejects the credentials.
    pub async fn login(
        &mut self,
        client: &PortfolioClient,
        email: &str,
        password: &str,
    ) -> Result<bool, ClientError> {
        let session = match client.login(email, password).await {
            Ok(session) => session,
            Err(ClientError::Status { status, code, .. }) if status == 400 || status == 401 => {
                warn!(code = %code, "Login rejected");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        self.storage.set(KEY_IS_AUTHENTICATED, "true")?;
        self.storage.set(KEY_USER_EMAIL, &session.email)?;
        self.storage.set(KEY_SESSION_TOKEN, &session.token)?;

        info!(email = %session.email, "Signed in");
        self.token = Some(session.token);
        self.state = AuthState::Authenticated {
            email: session.email,
        };
        self.is_loading = false;

        Ok(true)
    }

    /// Clears the session and returns the path to redirect to.
    pub fn logout(&mut self) -> Result<String, ClientError> {
        self.state = AuthState::Unauthenticated;
        self.token = None;

        self.storage.remove(KEY_IS_AUTHENTICATED)?;
        self.storage.remove(KEY_USER_EMAIL)?;
        self.storage.remove(KEY_SESSION_TOKEN)?;

        Ok(LOGIN_PATH.to_string())
    }

    /// Decides whether `path` may render. Only dashboard paths are gated.
    pub fn guard(&self, path: &str) -> GuardDecision {
        if !is_dashboard_path(path) {
            return GuardDecision::Render;
        }
        if self.is_loading {
            return GuardDecision::Wait;
        }
        if self.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(LOGIN_PATH.to_string())
        }
    }
}

fn is_dashboard_path(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}
