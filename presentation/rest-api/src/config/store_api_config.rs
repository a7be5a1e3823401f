use std::env;
use std::time::Duration;

use anyhow::Context;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the stock and product API
#[derive(Debug, Clone)]
pub struct StoreApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl StoreApiConfig {
    /// Environment variables:
    /// - STORE_API_URL: base URL of the API (default: "http://localhost:3333")
    /// - STORE_API_TIMEOUT_SECS: per-request timeout in seconds (default: 30)
    ///
    /// # Errors
    /// Returns error if either variable is set to an unparseable value
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("STORE_API_URL").ok(),
            env::var("STORE_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> anyhow::Result<Self> {
        let raw_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&raw_url).with_context(|| format!("STORE_API_URL is not a valid URL: {}", raw_url))?;

        let timeout_secs = match timeout_secs {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("STORE_API_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = StoreApiConfig::from_values(None, None).unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:3333/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_read_explicit_values() {
        let config = StoreApiConfig::from_values(
            Some("https://api.rocketshoes.test".to_string()),
            Some("5".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url.host_str(), Some("api.rocketshoes.test"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn should_reject_invalid_url() {
        let result = StoreApiConfig::from_values(Some("not a url".to_string()), None);

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_invalid_timeout() {
        let result = StoreApiConfig::from_values(None, Some("soon".to_string()));

        assert!(result.is_err());
    }
}
