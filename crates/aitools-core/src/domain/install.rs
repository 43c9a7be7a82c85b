//! Installed application status.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an installed application container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallStatus {
    Running,
    Stopped,
    Restarting,
    Error,
    /// Any state the install registry reports that we do not model.
    Other(String),
}

impl InstallStatus {
    /// Map a container state string (as reported by `docker inspect`) to a status.
    #[must_use]
    pub fn from_container_state(state: &str) -> Self {
        match state.trim().to_ascii_lowercase().as_str() {
            "running" => Self::Running,
            "exited" | "created" | "paused" | "stopped" => Self::Stopped,
            "restarting" => Self::Restarting,
            "dead" | "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Base information about an installed application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallInfo {
    /// Registry ID of the installation.
    pub id: u64,
    /// Application key, e.g. `ollama` or `openresty`.
    pub key: String,
    /// Name of the container running the application.
    pub container_name: String,
    pub status: InstallStatus,
}

impl InstallInfo {
    /// Whether the backing container is up and able to take commands.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.status.is_running()
    }
}
