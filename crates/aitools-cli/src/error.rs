//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use aitools_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad model name or other caller input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The runtime (or its container) is not installed.
    #[error("Not installed: {0}")]
    NotInstalled(String),

    /// A command inside the runtime container failed.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Job-log or data directory access failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code following sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,     // EX_USAGE
            Self::NotInstalled(_) => 69, // EX_UNAVAILABLE
            Self::Runtime(_) => 1,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IllegalInput(_) => Self::Arguments(err.to_string()),
            CoreError::Repository(RepositoryError::NotFound(what)) => Self::NotInstalled(what),
            CoreError::ReverseProxyNotInstalled(_) => Self::NotInstalled(err.to_string()),
            CoreError::Exec(_)
            | CoreError::RemovalFailed { .. }
            | CoreError::Repository(_)
            | CoreError::Website(_) => Self::Runtime(err.to_string()),
            CoreError::Path(_) | CoreError::Io { .. } => Self::Io(err.to_string()),
        }
    }
}
