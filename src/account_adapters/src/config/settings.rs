use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{
    self, BASE_CONFIG_FILE, CONFIG_DIR, DEFAULT_ENVIRONMENT, ENV_PREFIX, ENV_SEPARATOR, env, prod,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete runtime configuration. Built once at startup and handed to the
/// adapters that need it.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountServiceSettings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub hashing: HashingSettings,
    pub postgres: PostgresSettings,
    pub media_host: MediaHostSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub public_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub json_body_limit: usize,
    pub upload_body_limit: usize,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub access_token: JwtSettings,
    pub refresh_token: JwtSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashingSettings {
    pub memory_size_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            memory_size_kib: constants::password_hashing::MEMORY_SIZE_KIB,
            iterations: constants::password_hashing::ITERATIONS,
            parallelism: constants::password_hashing::PARALLELISM,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaHostSettings {
    pub base_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: Secret<String>,
    pub timeout_in_millis: u64,
}

impl MediaHostSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    /// Parses a comma separated origin list.
    pub fn parse(origins: &str) -> Self {
        Self(
            origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AllowedOrigins {
    fn from(origins: Vec<String>) -> Self {
        Self(origins)
    }
}

impl AccountServiceSettings {
    /// Loads `.env`, then layers `config/base.json`, `config/<APP_ENVIRONMENT>.json`,
    /// `APP__*` variables and finally the well-known variables such as
    /// `ACCESS_TOKEN_SECRET`.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::current_dir()
            .map_err(|e| SettingsError::Invalid(e.to_string()))?
            .join(CONFIG_DIR);
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self::load_from(&config_dir, &environment)
    }

    pub fn load_from(config_dir: &Path, environment: &str) -> Result<Self, SettingsError> {
        let hashing = HashingSettings::default();

        let settings: Self = Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.public_dir", constants::PUBLIC_DIR)?
            .set_default("application.upload_dir", constants::UPLOAD_DIR)?
            .set_default(
                "application.json_body_limit",
                constants::JSON_BODY_LIMIT_BYTES as u64,
            )?
            .set_default(
                "application.upload_body_limit",
                constants::UPLOAD_BODY_LIMIT_BYTES as u64,
            )?
            .set_default(
                "auth.access_token.cookie_name",
                constants::ACCESS_TOKEN_COOKIE_NAME,
            )?
            .set_default(
                "auth.access_token.time_to_live",
                constants::ACCESS_TOKEN_TTL_SECONDS,
            )?
            .set_default(
                "auth.refresh_token.cookie_name",
                constants::REFRESH_TOKEN_COOKIE_NAME,
            )?
            .set_default(
                "auth.refresh_token.time_to_live",
                constants::REFRESH_TOKEN_TTL_SECONDS,
            )?
            .set_default("hashing.memory_size_kib", hashing.memory_size_kib)?
            .set_default("hashing.iterations", hashing.iterations)?
            .set_default("hashing.parallelism", hashing.parallelism)?
            .set_default("postgres.max_connections", prod::POSTGRES_MAX_CONNECTIONS)?
            .set_default("media_host.base_url", prod::media_host::BASE_URL)?
            .set_default(
                "media_host.timeout_in_millis",
                prod::media_host::TIMEOUT_IN_MILLIS,
            )?
            .add_source(File::from(config_dir.join(BASE_CONFIG_FILE)).required(false))
            .add_source(File::from(config_dir.join(format!("{environment}.json"))).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .set_override_option(
                "auth.access_token.secret",
                std::env::var(env::ACCESS_TOKEN_SECRET_ENV_VAR).ok(),
            )?
            .set_override_option(
                "auth.access_token.time_to_live",
                parse_seconds(env::ACCESS_TOKEN_EXPIRY_ENV_VAR)?,
            )?
            .set_override_option(
                "auth.refresh_token.secret",
                std::env::var(env::REFRESH_TOKEN_SECRET_ENV_VAR).ok(),
            )?
            .set_override_option(
                "auth.refresh_token.time_to_live",
                parse_seconds(env::REFRESH_TOKEN_EXPIRY_ENV_VAR)?,
            )?
            .set_override_option(
                "postgres.url",
                std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
            )?
            .set_override_option(
                "application.allowed_origins",
                std::env::var(env::CORS_ORIGIN_ENV_VAR)
                    .ok()
                    .map(|origins| AllowedOrigins::parse(&origins).0),
            )?
            .set_override_option(
                "media_host.cloud_name",
                std::env::var(env::CLOUDINARY_CLOUD_NAME_ENV_VAR).ok(),
            )?
            .set_override_option(
                "media_host.api_key",
                std::env::var(env::CLOUDINARY_API_KEY_ENV_VAR).ok(),
            )?
            .set_override_option(
                "media_host.api_secret",
                std::env::var(env::CLOUDINARY_API_SECRET_ENV_VAR).ok(),
            )?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let access = &self.auth.access_token;
        let refresh = &self.auth.refresh_token;

        if access.secret.expose_secret().is_empty() || refresh.secret.expose_secret().is_empty() {
            return Err(SettingsError::Invalid(
                "token secrets must not be empty".to_string(),
            ));
        }
        if access.secret.expose_secret() == refresh.secret.expose_secret() {
            return Err(SettingsError::Invalid(
                "access and refresh token secrets must differ".to_string(),
            ));
        }
        if access.time_to_live <= 0 || refresh.time_to_live <= 0 {
            return Err(SettingsError::Invalid(
                "token time to live must be positive".to_string(),
            ));
        }
        if access.cookie_name == refresh.cookie_name {
            return Err(SettingsError::Invalid(
                "access and refresh cookie names must differ".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_seconds(var: &str) -> Result<Option<i64>, SettingsError> {
    std::env::var(var)
        .ok()
        .map(|value| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| SettingsError::Invalid(format!("{var} must be a number of seconds")))
        })
        .transpose()
}
