//! `AppInstallPort` implementation that asks Docker about known containers.
//!
//! There is no install database here: each application key is registered
//! with the container that runs it, and its status comes from
//! `docker inspect`.

use std::path::PathBuf;

use aitools_core::{AppInstallPort, ExecError, InstallInfo, InstallStatus, RepositoryError};
use async_trait::async_trait;
use tracing::debug;

use crate::docker::{DEFAULT_DOCKER_BINARY, DockerCli};

const STATE_FORMAT: &str = "{{.State.Status}}";

#[derive(Debug, Clone)]
struct Registration {
    id: u64,
    key: String,
    container: String,
}

/// Install registry backed by a static key → container table.
#[derive(Debug, Clone)]
pub struct DockerInstallProbe {
    docker: DockerCli,
    apps: Vec<Registration>,
}

impl Default for DockerInstallProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerInstallProbe {
    /// Probe with `docker` from `PATH` and no registered applications.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_DOCKER_BINARY)
    }

    /// Probe with a specific docker-compatible binary.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            docker: DockerCli::new(binary),
            apps: Vec::new(),
        }
    }

    /// Register `key` as running in `container`. IDs are assigned from 1 in
    /// registration order; re-registering a key replaces its container.
    #[must_use]
    pub fn register(mut self, key: impl Into<String>, container: impl Into<String>) -> Self {
        let key = key.into();
        let container = container.into();
        if let Some(existing) = self.apps.iter_mut().find(|a| a.key == key) {
            existing.container = container;
        } else {
            let id = self.apps.len() as u64 + 1;
            self.apps.push(Registration { id, key, container });
        }
        self
    }

    async fn inspect(&self, app: &Registration) -> Result<InstallInfo, RepositoryError> {
        let args = ["inspect", "-f", STATE_FORMAT, app.container.as_str()];
        let state = match self.docker.capture(&args).await {
            Ok(stdout) => stdout,
            Err(ExecError::NonZeroExit { output, .. }) => {
                debug!(container = %app.container, output = %output.trim(), "container not found");
                return Err(RepositoryError::NotFound(format!(
                    "container {} for app {}",
                    app.container, app.key
                )));
            }
            Err(e) => return Err(RepositoryError::Storage(e.to_string())),
        };

        Ok(InstallInfo {
            id: app.id,
            key: app.key.clone(),
            container_name: app.container.clone(),
            status: InstallStatus::from_container_state(&state),
        })
    }
}

#[async_trait]
impl AppInstallPort for DockerInstallProbe {
    async fn load_base_info(&self, app_key: &str) -> Result<InstallInfo, RepositoryError> {
        let app = self
            .apps
            .iter()
            .find(|a| a.key == app_key)
            .ok_or_else(|| RepositoryError::NotFound(format!("app={app_key}")))?;
        self.inspect(app).await
    }

    async fn get_by_id(&self, id: u64) -> Result<InstallInfo, RepositoryError> {
        let app = self
            .apps
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("id={id}")))?;
        self.inspect(app).await
    }
}
