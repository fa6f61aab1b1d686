/// Application configuration
///
/// Values come from the process environment (optionally seeded from a `.env`
/// file through `dotenvy`). Every knob has a default except the backend base
/// URL, which is only required once the HTTP job source is built.
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use chrono_tz::Tz;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_API_BASE_URL: &str = "SPOTLESS_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "SPOTLESS_API_TOKEN";
pub const ENV_TIMEZONE: &str = "SPOTLESS_TIMEZONE";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "SPOTLESS_HTTP_TIMEOUT_SECS";
pub const ENV_HTTP_MAX_RETRIES: &str = "SPOTLESS_HTTP_MAX_RETRIES";

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend root, e.g. `https://api.spotless.app/v1`
    pub api_base_url: Option<String>,
    /// Bearer token attached to backend requests
    pub api_token: Option<String>,
    /// Timezone that defines the calendar day for job filtering
    pub timezone: Tz,
    pub http_timeout: Duration,
    pub http_max_retries: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_token: None,
            timezone: Tz::UTC,
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http_max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Seed the process environment from `.env`, if one is found
///
/// Variables already set are left alone. Call before `init_logger` so a
/// `RUST_LOG` from the file takes effect.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the process environment
    pub fn from_env() -> AppResult<Self> {
        if let Some(path) = load_dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_base_url = match read(ENV_API_BASE_URL) {
            Some(url) => {
                Validator::validate_base_url(&url)
                    .map_err(|e| AppError::ConfigError(format!("{}: {}", ENV_API_BASE_URL, e)))?;
                Some(url.trim_end_matches('/').to_string())
            }
            None => None,
        };

        let timezone = match read(ENV_TIMEZONE) {
            Some(name) => name.parse::<Tz>().map_err(|e| {
                AppError::ConfigError(format!(
                    "{}: unknown timezone '{}': {}",
                    ENV_TIMEZONE, name, e
                ))
            })?,
            None => Tz::UTC,
        };

        let http_timeout_secs = match read(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("{}: {}", ENV_HTTP_TIMEOUT_SECS, e))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Validator::validate_timeout_secs(http_timeout_secs)
            .map_err(|e| AppError::ConfigError(format!("{}: {}", ENV_HTTP_TIMEOUT_SECS, e)))?;

        let http_max_retries = match read(ENV_HTTP_MAX_RETRIES) {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                AppError::ConfigError(format!("{}: {}", ENV_HTTP_MAX_RETRIES, e))
            })?,
            None => DEFAULT_MAX_RETRIES,
        };
        Validator::validate_max_retries(http_max_retries)
            .map_err(|e| AppError::ConfigError(format!("{}: {}", ENV_HTTP_MAX_RETRIES, e)))?;

        Ok(Self {
            api_base_url,
            api_token: read(ENV_API_TOKEN),
            timezone,
            http_timeout: Duration::from_secs(http_timeout_secs),
            http_max_retries,
        })
    }

    /// Base URL, or a configuration error when the backend is not configured
    pub fn require_api_base_url(&self) -> AppResult<&str> {
        self.api_base_url.as_deref().ok_or_else(|| {
            AppError::ConfigError(format!("{} environment variable not set", ENV_API_BASE_URL))
        })
    }
}
