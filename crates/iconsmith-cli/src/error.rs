//! CLI-specific error types and exit codes.

use iconsmith_http::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The generation request failed; carries the notification text.
    #[error("{0}")]
    Generation(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin closed, output directory unusable, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code (sysexits.h where one fits).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Generation(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }

    /// Exit code for an arbitrary handler error.
    pub fn exit_code_for(err: &anyhow::Error) -> i32 {
        err.downcast_ref::<Self>().map_or(1, Self::exit_code)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
