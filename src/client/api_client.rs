use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::client::error::ClientError;
use crate::config::ClientConfig;
use crate::modules::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::modules::auth::application::domain::AdminSession;
use crate::modules::auth::application::ports::incoming::use_cases::LoginResult;
use crate::modules::profile::adapter::incoming::web::routes::UpsertProfileRequest;
use crate::modules::profile::application::ports::outgoing::ProfileResult;
use crate::modules::project::adapter::incoming::web::routes::ProjectRequest;
use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::modules::social::adapter::incoming::web::routes::SocialMediaRequest;
use crate::modules::social::application::ports::outgoing::SocialMediaResult;

pub const PROFILE_KEY: &str = "/api/profile";
pub const PROJECTS_KEY: &str = "/api/projects";
pub const PUBLIC_PROJECTS_KEY: &str = "/api/public/projects";
pub const SOCIALS_KEY: &str = "/api/socials";

pub fn project_key(id: i32) -> String {
    format!("{PROJECTS_KEY}/{id}")
}

pub fn public_project_key(id: i32) -> String {
    format!("{PUBLIC_PROJECTS_KEY}/{id}")
}

pub fn social_key(id: i32) -> String {
    format!("{SOCIALS_KEY}/{id}")
}

/// Loads the JSON payload behind a resource key such as `/api/projects`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Value, ClientError>;
}

/// Result of a write, with the cache keys it made stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub value: T,
    pub invalidates: Vec<String>,
}

impl<T> Mutation<T> {
    fn new(value: T, invalidates: Vec<String>) -> Self {
        Self { value, invalidates }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<EnvelopeError>,
}

#[derive(Deserialize)]
struct EnvelopeError {
    code: String,
    message: String,
}

/// Typed HTTP client for the portfolio API.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PortfolioClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` on every later request.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // ──────────────────────────────────────────────────────────
    // Profile
    // ──────────────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Result<ProfileResult, ClientError> {
        self.send(self.request(Method::GET, PROFILE_KEY)).await
    }

    pub async fn upsert_profile(
        &self,
        body: &UpsertProfileRequest,
    ) -> Result<Mutation<ProfileResult>, ClientError> {
        let profile = self
            .send(self.request(Method::PUT, PROFILE_KEY).json(body))
            .await?;
        Ok(Mutation::new(profile, vec![PROFILE_KEY.to_string()]))
    }

    // ──────────────────────────────────────────────────────────
    // Projects
    // ──────────────────────────────────────────────────────────

    pub async fn list_projects(&self) -> Result<Vec<ProjectResult>, ClientError> {
        self.send(self.request(Method::GET, PROJECTS_KEY)).await
    }

    pub async fn get_project(&self, id: i32) -> Result<ProjectResult, ClientError> {
        self.send(self.request(Method::GET, &project_key(id))).await
    }

    pub async fn create_project(
        &self,
        body: &ProjectRequest,
    ) -> Result<Mutation<ProjectResult>, ClientError> {
        let project: ProjectResult = self
            .send(self.request(Method::POST, PROJECTS_KEY).json(body))
            .await?;
        let keys = vec![PROJECTS_KEY.to_string(), PUBLIC_PROJECTS_KEY.to_string()];
        Ok(Mutation::new(project, keys))
    }

    pub async fn update_project(
        &self,
        id: i32,
        body: &ProjectRequest,
    ) -> Result<Mutation<ProjectResult>, ClientError> {
        let project = self
            .send(self.request(Method::PUT, &project_key(id)).json(body))
            .await?;
        Ok(Mutation::new(project, project_keys(id)))
    }

    pub async fn delete_project(&self, id: i32) -> Result<Mutation<()>, ClientError> {
        self.send_empty(self.request(Method::DELETE, &project_key(id)))
            .await?;
        Ok(Mutation::new((), project_keys(id)))
    }

    // ──────────────────────────────────────────────────────────
    // Socials
    // ──────────────────────────────────────────────────────────

    pub async fn list_socials(&self) -> Result<Vec<SocialMediaResult>, ClientError> {
        self.send(self.request(Method::GET, SOCIALS_KEY)).await
    }

    pub async fn create_social(
        &self,
        body: &SocialMediaRequest,
    ) -> Result<Mutation<SocialMediaResult>, ClientError> {
        let social: SocialMediaResult = self
            .send(self.request(Method::POST, SOCIALS_KEY).json(body))
            .await?;
        Ok(Mutation::new(social, vec![SOCIALS_KEY.to_string()]))
    }

    pub async fn update_social(
        &self,
        id: i32,
        body: &SocialMediaRequest,
    ) -> Result<Mutation<SocialMediaResult>, ClientError> {
        let social = self
            .send(self.request(Method::PUT, &social_key(id)).json(body))
            .await?;
        Ok(Mutation::new(social, social_keys(id)))
    }

    pub async fn delete_social(&self, id: i32) -> Result<Mutation<()>, ClientError> {
        self.send_empty(self.request(Method::DELETE, &social_key(id)))
            .await?;
        Ok(Mutation::new((), social_keys(id)))
    }

    // ──────────────────────────────────────────────────────────
    // Auth
    // ──────────────────────────────────────────────────────────

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, ClientError> {
        let body = LoginRequestDto {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.request(Method::POST, "/api/auth/login").json(&body))
            .await
    }

    pub async fn session(&self) -> Result<AdminSession, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::Unauthorized);
        }
        self.send(self.request(Method::GET, "/api/auth/session"))
            .await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.send_empty(self.request(Method::POST, "/api/auth/logout"))
            .await
    }

    // ──────────────────────────────────────────────────────────
    // Transport
    // ──────────────────────────────────────────────────────────

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status, &bytes));
        }

        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        envelope.data.ok_or_else(|| ClientError::Status {
            status: status.as_u16(),
            code: "EMPTY_RESPONSE".to_string(),
            message: "Response carried no data".to_string(),
        })
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(status_error(status, &bytes));
        }
        Ok(())
    }
}

#[async_trait]
impl Fetcher for PortfolioClient {
    async fn fetch(&self, key: &str) -> Result<Value, ClientError> {
        debug!(key, "Fetching resource");
        self.send(self.request(Method::GET, key)).await
    }
}

fn project_keys(id: i32) -> Vec<String> {
    vec![
        PROJECTS_KEY.to_string(),
        project_key(id),
        PUBLIC_PROJECTS_KEY.to_string(),
        public_project_key(id),
    ]
}

fn social_keys(id: i32) -> Vec<String> {
    vec![SOCIALS_KEY.to_string(), social_key(id)]
}

fn status_error(status: StatusCode, body: &[u8]) -> ClientError {
    let parsed = serde_json::from_slice::<Envelope<Value>>(body)
        .ok()
        .and_then(|envelope| envelope.error);

    match parsed {
        Some(error) => ClientError::Status {
            status: status.as_u16(),
            code: error.code,
            message: error.message,
        },
        None => ClientError::Status {
            status: status.as_u16(),
            code: "HTTP_ERROR".to_string(),
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
