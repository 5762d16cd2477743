//! Construction errors for the HTTP adapters.
//!
//! Request-time failures are not represented here; they are classified
//! straight into the core port errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured base address does not parse.
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured base address is not http(s).
    #[error("API base URL '{url}' must use http or https")]
    UnsupportedScheme { url: String },

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
