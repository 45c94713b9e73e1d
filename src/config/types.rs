//! Configuration type definitions.

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Detection service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Detection service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the detection service.
    pub base_url: String,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Overall request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Save the annotated image next to the input by default.
    pub save_annotated: bool,
}

/// Validate a loaded configuration.
pub fn validate_config(config: &Config) -> crate::error::Result<()> {
    if config.api.base_url.is_empty() {
        return Err(crate::error::Error::ConfigValidation {
            message: "api.base_url must not be empty".to_string(),
        });
    }
    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(crate::error::Error::ConfigValidation {
            message: format!(
                "api.base_url must start with http:// or https://, got '{}'",
                config.api.base_url
            ),
        });
    }
    if config.api.request_timeout_secs == 0 {
        return Err(crate::error::Error::ConfigValidation {
            message: "api.request_timeout_secs must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.api.connect_timeout_secs, 30);
        assert_eq!(config.api.request_timeout_secs, 300);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = Config::default();
        config.api.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.api.request_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }
}
