//! Deployment settings read from the environment (and an optional `.env`).
//!
//! | Variable | Default |
//! |---|---|
//! | `SHORTLY_API_URL` | `http://localhost:8080` |
//! | `SHORTLY_REQUEST_TIMEOUT_MS` | `10000` |
//! | `SHORTLY_CONNECT_TIMEOUT_MS` | `5000` |
//! | `SHORTLY_LOG` | `info` |
//! | `SHORTLY_LOG_DEST` | `file` |
//!
//! Empty values count as unset.

use std::time::Duration;

use log::LevelFilter;
use shortly_core::is_valid_url;
use shortly_engine::ClientSettings;

use super::logging::LogDestination;

pub const ENV_API_URL: &str = "SHORTLY_API_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "SHORTLY_REQUEST_TIMEOUT_MS";
pub const ENV_CONNECT_TIMEOUT_MS: &str = "SHORTLY_CONNECT_TIMEOUT_MS";
pub const ENV_LOG: &str = "SHORTLY_LOG";
pub const ENV_LOG_DEST: &str = "SHORTLY_LOG_DEST";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHORTLY_API_URL is not an absolute URL: {0:?}")]
    InvalidApiUrl(String),
    #[error("{var} must be a positive number of milliseconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("SHORTLY_LOG is not a log level: {0:?}")]
    InvalidLogLevel(String),
    #[error("SHORTLY_LOG_DEST must be one of file, terminal, both; got {0:?}")]
    InvalidLogDestination(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut client = ClientSettings::default();

        if let Some(raw) = get(ENV_API_URL) {
            let trimmed = raw.trim().trim_end_matches('/').to_string();
            if !is_valid_url(&trimmed) {
                return Err(ConfigError::InvalidApiUrl(raw));
            }
            client.base_url = trimmed;
        }
        if let Some(raw) = get(ENV_REQUEST_TIMEOUT_MS) {
            client.request_timeout = parse_millis(ENV_REQUEST_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = get(ENV_CONNECT_TIMEOUT_MS) {
            client.connect_timeout = parse_millis(ENV_CONNECT_TIMEOUT_MS, &raw)?;
        }

        let log_level = match get(ENV_LOG) {
            Some(raw) => {
                shortly_logging::level_from_str(&raw).ok_or(ConfigError::InvalidLogLevel(raw))?
            }
            None => LevelFilter::Info,
        };
        let log_destination = match get(ENV_LOG_DEST) {
            Some(raw) => {
                LogDestination::parse(&raw).ok_or(ConfigError::InvalidLogDestination(raw))?
            }
            None => LogDestination::default(),
        };

        Ok(Self {
            client,
            log_level,
            log_destination,
        })
    }
}

fn parse_millis(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidTimeout {
            var,
            value: raw.to_string(),
        }),
    }
}
