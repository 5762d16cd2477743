//! Opening a resource in a new browsing context.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to open {url}: {message}")]
pub struct ViewError {
    pub url: String,
    pub message: String,
}

/// Something that can show a remote resource to the user, e.g. the
/// system browser.
#[cfg_attr(test, mockall::automock)]
pub trait BrowsingContextPort: Send + Sync {
    fn open(&self, url: &str) -> Result<(), ViewError>;
}
