use std::env;
use std::time::Duration;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;
use crate::modules::auth::application::domain::AdminCredentials;

const MIN_JWT_SECRET_LEN: usize = 32;
const MAX_SESSION_EXPIRY: i64 = 604_800;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    WeakJwtSecret,

    #[error("JWT_SESSION_EXPIRY must be between 1 and 604800 seconds")]
    SessionExpiryOutOfRange,
}

/// Server settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub admin: AdminCredentials,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let or_default = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database_url = required("DATABASE_URL")?;
        let host = or_default("HOST", "127.0.0.1");
        let port = parse("PORT", &or_default("PORT", "8080"))?;
        let run_migrations = parse_bool("RUN_MIGRATIONS", &or_default("RUN_MIGRATIONS", "false"))?;
        let db_max_connections = parse("DB_MAX_CONNECTIONS", &or_default("DB_MAX_CONNECTIONS", "20"))?;

        let admin_email = required("ADMIN_EMAIL")?;
        let admin_hash = required("ADMIN_PASSWORD_HASH")?;
        if !admin_hash.starts_with("$argon2") {
            return Err(ConfigError::Invalid {
                key: "ADMIN_PASSWORD_HASH",
                value: "<not an argon2 PHC string>".to_string(),
            });
        }

        let secret_key = required("JWT_SECRET")?;
        if secret_key.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::WeakJwtSecret);
        }

        let session_expiry: i64 =
            parse("JWT_SESSION_EXPIRY", &or_default("JWT_SESSION_EXPIRY", "86400"))?;
        if session_expiry <= 0 || session_expiry > MAX_SESSION_EXPIRY {
            return Err(ConfigError::SessionExpiryOutOfRange);
        }

        Ok(Self {
            database_url,
            host,
            port,
            run_migrations,
            db_max_connections,
            admin: AdminCredentials::new(&admin_email, &admin_hash),
            jwt: JwtConfig {
                secret_key,
                issuer: or_default("JWT_ISSUER", "portfolio"),
                session_expiry,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

/// Settings for [`crate::client::PortfolioClient`] and [`crate::client::SwrCache`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Entries younger than this are served from cache without refetching.
    pub dedupe_interval: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: Duration::from_secs(10),
            dedupe_interval: Duration::from_secs(2),
        }
    }
}
