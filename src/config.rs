// src/config.rs
use crate::application::queries::articles::DEFAULT_MAX_PAGE_SIZE;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    database_max_connections: u32,
    max_page_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://articles.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_database_max_connections() -> u32 {
    16
}

fn parse_number(
    key: &'static str,
    raw: Option<String>,
    default: u32,
) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(0) | Err(_) => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got {value:?}"
            ))),
            Ok(parsed) => Ok(parsed),
        },
    }
}

impl AppConfig {
    /// Build configuration from environment variables, after letting a
    /// `.env` file populate them.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back
    /// to defaults; set-but-invalid numeric keys are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let database_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            default_database_max_connections(),
        )?;
        let max_page_size = parse_number(
            "MAX_PAGE_SIZE",
            lookup("MAX_PAGE_SIZE"),
            DEFAULT_MAX_PAGE_SIZE,
        )?;

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            database_max_connections,
            max_page_size,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }
}
