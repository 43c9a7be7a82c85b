//! Model removal service - removes a model from the runtime and its job logs.

use std::sync::Arc;

use tracing::info;

use super::job_log;
use super::runtime_gate::{live_models, running_container};
use crate::domain::listing::LATEST_TAG;
use crate::paths::job_log_path;
use crate::ports::{AppInstallPort, ContainerExecPort, CoreError};
use crate::settings::AiToolsConfig;
use crate::utils::validation::check_model_name;

/// Service for removing models.
pub struct ModelRemovalService {
    installs: Arc<dyn AppInstallPort>,
    exec: Arc<dyn ContainerExecPort>,
    config: Arc<AiToolsConfig>,
}

impl ModelRemovalService {
    /// Create a new removal service.
    pub fn new(
        installs: Arc<dyn AppInstallPort>,
        exec: Arc<dyn ContainerExecPort>,
        config: Arc<AiToolsConfig>,
    ) -> Self {
        Self {
            installs,
            exec,
            config,
        }
    }

    /// Remove `name` from the runtime (if listed) and delete its job logs.
    ///
    /// Log cleanup runs whether or not the runtime knew the model, so failed
    /// pulls can be cleared from the listing. For `name:latest` the log of the
    /// bare name is removed too.
    pub async fn delete(&self, name: &str) -> Result<(), CoreError> {
        check_model_name(name)?;

        let Some(container) =
            running_container(self.installs.as_ref(), &self.config.app_key).await?
        else {
            return Ok(());
        };

        let tool = self.config.tool.as_str();
        let live = live_models(self.exec.as_ref(), &container, tool).await?;
        if live.iter().any(|m| m.name == name) {
            self.exec
                .exec(&container, &[tool, "rm", name])
                .await
                .map_err(|source| CoreError::RemovalFailed {
                    name: name.to_string(),
                    source,
                })?;
            info!(model = %name, "removed model from runtime");
        }

        let log_dir = self.config.job_log_dir();
        let log_path = job_log_path(&log_dir, name);
        let bare_path = job_log_path(&log_dir, name.strip_suffix(LATEST_TAG).unwrap_or(name));
        job_log::remove_quietly(log_path.clone()).await;
        if bare_path != log_path {
            job_log::remove_quietly(bare_path).await;
        }

        Ok(())
    }
}
