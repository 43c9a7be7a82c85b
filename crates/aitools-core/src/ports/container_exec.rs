//! Container command execution port.
//!
//! This port runs a command inside a named container. Implementations own
//! the process details (binary, stdio wiring); the core only ever issues the
//! runtime's `list`, `show`, `rm` and `run` sub-commands through it.

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs::File;

/// Errors from running a command in a container.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process could not be spawned at all.
    #[error("Failed to launch `{command}`: {reason}")]
    Launch { command: String, reason: String },

    /// The process ran and exited unsuccessfully. `output` holds what it printed.
    #[error("`{command}` exited with {status}, output: {output}")]
    NonZeroExit {
        command: String,
        status: String,
        output: String,
    },

    /// Copying process output to the sink failed.
    #[error("I/O error while running `{command}`: {reason}")]
    Io { command: String, reason: String },
}

impl ExecError {
    /// Captured process output, if the process got far enough to produce any.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::NonZeroExit { output, .. } => Some(output),
            Self::Launch { .. } | Self::Io { .. } => None,
        }
    }
}

/// Port for executing commands inside a running container.
///
/// Calls block (asynchronously) until the process exits; no timeout is
/// applied here. Callers that need bounded latency wrap the future.
#[async_trait]
pub trait ContainerExecPort: Send + Sync {
    /// Run `args` in `container` and return its captured standard output.
    async fn exec(&self, container: &str, args: &[&str]) -> Result<String, ExecError>;

    /// Run `args` in `container`, writing stdout and stderr into `sink` as
    /// they are produced.
    ///
    /// The sink stays owned by the caller, who may append to it afterwards.
    async fn exec_streaming(
        &self,
        container: &str,
        args: &[&str],
        sink: &mut File,
    ) -> Result<(), ExecError>;
}
