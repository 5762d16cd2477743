//! Generation service port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{GeneratedIcon, GenerationPayload};

/// Why a generation call did not produce icons.
///
/// The `Display` output is exactly the text shown in the error
/// notification, so adapters must put user-facing text in `message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    /// The service answered with a structured `{ "error": ... }` body.
    ///
    /// Rate limiting (429) and input rejection surface this way.
    #[error("{message}")]
    Application {
        /// HTTP status, when the adapter knows it.
        status: Option<u16>,
        /// Value of the body's `error` field, verbatim.
        message: String,
    },

    /// Anything without a structured body: connection failures, bad
    /// statuses with unparseable bodies, malformed success responses.
    #[error("{message}")]
    Transport {
        /// Generic description of the failure.
        message: String,
    },
}

impl GenerationFailure {
    pub fn application(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Application {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Text for the error notification.
    pub fn notification_message(&self) -> &str {
        match self {
            Self::Application { message, .. } | Self::Transport { message } => message,
        }
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Application { status, .. } => *status,
            Self::Transport { .. } => None,
        }
    }

    pub const fn is_rate_limited(&self) -> bool {
        matches!(self.status(), Some(429))
    }
}

/// Remote icon generation service.
///
/// One call per submission. Implementations must not retry and must not
/// impose a deadline of their own unless configured to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IconGenerationPort: Send + Sync {
    /// Request a batch of icons for `payload`.
    async fn generate(
        &self,
        payload: &GenerationPayload,
    ) -> Result<Vec<GeneratedIcon>, GenerationFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_bare_message() {
        let err = GenerationFailure::application(Some(429), "Too Many Requests");
        assert_eq!(err.to_string(), "Too Many Requests");
        assert_eq!(err.notification_message(), "Too Many Requests");

        let err = GenerationFailure::transport("API Error");
        assert_eq!(err.to_string(), "API Error");
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(GenerationFailure::application(Some(429), "slow down").is_rate_limited());
        assert!(!GenerationFailure::application(Some(400), "bad topic").is_rate_limited());
        assert!(!GenerationFailure::transport("offline").is_rate_limited());
    }
}
