use std::time::Duration;

use crate::constants::*;

/// Client configuration resolved once at startup and injected into
/// `ApiClient::new`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the kiosk backend, without the `/api` prefix.
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let base_url = std::env::var(ENV_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if base_url.is_empty() {
            return Err(format!("{} must not be empty", ENV_BASE_URL));
        }

        let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Full base for API requests, e.g. `http://localhost:8080/api`.
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
