//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `docker` or web-server specifics in any signature
//! - Command execution takes an argument vector, never a shell string
//! - Registry and website traits are minimal and lookup/mutation focused

pub mod app_install;
pub mod container_exec;
pub mod website;

use std::path::PathBuf;
use thiserror::Error;

use crate::paths::PathError;

pub use app_install::AppInstallPort;
pub use container_exec::{ContainerExecPort, ExecError};
pub use website::{
    AppType, HttpConfig, HttpsOp, SslSource, Website, WebsiteCreate, WebsiteError, WebsitePort,
    WebsiteType,
};

#[cfg(test)]
pub use app_install::MockAppInstallPort;
#[cfg(test)]
pub use website::MockWebsitePort;

/// Domain-specific errors for registry lookups.
///
/// This error type abstracts away storage implementation details and
/// provides a clean interface for services to handle lookup failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage or lookup backend error.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller supplied name could escape into shell interpretation.
    #[error("Illegal characters in input: {0:?}")]
    IllegalInput(String),

    /// An external command could not be launched or exited non-zero.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The runtime refused to remove a model it reported as present.
    #[error("handle rm {name} failed: {source}")]
    RemovalFailed {
        name: String,
        #[source]
        source: ExecError,
    },

    /// Binding operations need the reverse proxy application installed.
    #[error("Reverse proxy ({0}) is not installed")]
    ReverseProxyNotInstalled(String),

    /// Install registry lookup failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Website subsystem call failed.
    #[error(transparent)]
    Website(#[from] WebsiteError),

    /// Path resolution or directory creation failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Job-log file access failed.
    #[error("I/O error on {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Returns true for errors caused by the caller's input rather than the system.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::IllegalInput(_) | Self::Repository(RepositoryError::NotFound(_))
        )
    }
}
