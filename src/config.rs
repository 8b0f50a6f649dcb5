//! Flight data provider configuration

use crate::error::{AppError, Result};
use std::time::Duration;

/// Default aviationstack endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.aviationstack.com/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the flight-data provider
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Configuration with the default endpoint and timeout
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: access_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the environment.
    ///
    /// `FLYBUDDY_ACCESS_KEY` is required; `FLYBUDDY_API_URL` overrides the
    /// default endpoint.
    pub fn from_env() -> Result<Self> {
        let access_key = std::env::var("FLYBUDDY_ACCESS_KEY")
            .map_err(|_| AppError::Config("FLYBUDDY_ACCESS_KEY is not set".to_string()))?;

        let mut config = Self::new(access_key);
        if let Ok(base_url) = std::env::var("FLYBUDDY_API_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_access_key() {
        // Single test owns both variables so parallel tests don't race on them
        std::env::remove_var("FLYBUDDY_ACCESS_KEY");
        std::env::remove_var("FLYBUDDY_API_URL");
        assert!(ApiConfig::from_env().is_err());

        std::env::set_var("FLYBUDDY_ACCESS_KEY", "test-key");
        std::env::set_var("FLYBUDDY_API_URL", "http://localhost:8108/v1");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.access_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8108/v1");

        std::env::remove_var("FLYBUDDY_ACCESS_KEY");
        std::env::remove_var("FLYBUDDY_API_URL");
    }

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = ApiConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
