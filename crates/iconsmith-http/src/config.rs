//! Public configuration for the generation service client.
//!
//! The base address is injected once and reused by every request.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Base address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Environment variable holding the base address.
pub const API_URL_ENV: &str = "ICONSMITH_API_URL";

/// Older variable name still honored when [`API_URL_ENV`] is unset.
pub const LEGACY_API_URL_ENV: &str = "VITE_API_URL";

const GENERATE_PATH: &str = "generate-icons";

/// Configuration for the generation service client.
///
/// # Example
///
/// ```
/// use iconsmith_http::ApiConfig;
///
/// let config = ApiConfig::new().with_base_url("https://icons.example.com/api");
/// assert_eq!(
///     config.generate_endpoint().unwrap().as_str(),
///     "https://icons.example.com/api/generate-icons"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    /// No deadline unless set.
    pub(crate) timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("iconsmith/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the base address from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the base address through `lookup`.
    ///
    /// Blank values are treated as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let configured = [API_URL_ENV, LEGACY_API_URL_ENV]
            .into_iter()
            .filter_map(&lookup)
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        match configured {
            Some(base_url) => Self::default().with_base_url(base_url),
            None => Self::default(),
        }
    }

    /// Set the service base address.
    ///
    /// Defaults to `http://localhost:3000/api`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Put a deadline on generation requests.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/generate-icons`, validated.
    pub fn generate_endpoint(&self) -> Result<Url, ConfigError> {
        let base = self.base_url.trim().trim_end_matches('/');
        let endpoint = format!("{base}/{GENERATE_PATH}");
        let url = Url::parse(&endpoint).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::UnsupportedScheme {
                url: self.base_url.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ApiConfig::new();
        assert_eq!(config.base_url(), "http://localhost:3000/api");
        assert!(config.user_agent.starts_with("iconsmith/"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ApiConfig::new()
            .with_base_url("https://icons.example.com/api/")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(
            config.generate_endpoint().unwrap().as_str(),
            "https://icons.example.com/api/generate-icons"
        );
    }

    #[test]
    fn test_from_lookup_prefers_primary_variable() {
        let config = ApiConfig::from_lookup(lookup(&[
            (API_URL_ENV, "http://primary:1/api"),
            (LEGACY_API_URL_ENV, "http://legacy:2/api"),
        ]));
        assert_eq!(config.base_url(), "http://primary:1/api");
    }

    #[test]
    fn test_from_lookup_falls_back_to_legacy_variable() {
        let config = ApiConfig::from_lookup(lookup(&[
            (API_URL_ENV, "  "),
            (LEGACY_API_URL_ENV, "http://legacy:2/api"),
        ]));
        assert_eq!(config.base_url(), "http://legacy:2/api");
    }

    #[test]
    fn test_from_lookup_defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::new()
            .with_base_url("not a url")
            .generate_endpoint()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));

        let err = ApiConfig::new()
            .with_base_url("ftp://files.example.com")
            .generate_endpoint()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }
}
