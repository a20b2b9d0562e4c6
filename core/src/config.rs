// Client configuration

use std::env;
use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_API_URL: &str = "https://api.codehawk.dev/api/v1";

/// Per-request timeout applied by the client
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "CODEHAWK_API_KEY";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "CODEHAWK_API_URL";

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),
}

/// Settings for a CodeHawk client. Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the production API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at another API root (e.g. a staging server or mock)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `CODEHAWK_API_KEY` and `CODEHAWK_API_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// There is no fallback credential: a missing or empty key is an error.
    /// An empty URL falls back to [`DEFAULT_API_URL`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.is_empty()) {
            config = config.with_base_url(url);
        }

        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_production_defaults() {
        let config = ClientConfig::new("key");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let result = ClientConfig::from_lookup(|_| None);
        assert_eq!(result, Err(ConfigError::MissingApiKey(API_KEY_ENV)));
    }

    #[test]
    fn test_from_lookup_empty_key() {
        let result = ClientConfig::from_lookup(|_| Some(String::new()));
        assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    }
}
