//! Model detail service - runtime `show` output and pull log read-back.

use std::io::ErrorKind;
use std::sync::Arc;

use super::runtime_gate::running_container;
use crate::paths::job_log_path;
use crate::ports::{AppInstallPort, ContainerExecPort, CoreError};
use crate::settings::AiToolsConfig;
use crate::utils::validation::check_model_name;

/// Service for inspecting a single model.
pub struct ModelDetailService {
    installs: Arc<dyn AppInstallPort>,
    exec: Arc<dyn ContainerExecPort>,
    config: Arc<AiToolsConfig>,
}

impl ModelDetailService {
    /// Create a new detail service.
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

    /// The runtime's description of `name` (`<tool> show <name>`).
    ///
    /// Empty when the runtime is not running.
    pub async fn load_detail(&self, name: &str) -> Result<String, CoreError> {
        check_model_name(name)?;

        let Some(container) =
            running_container(self.installs.as_ref(), &self.config.app_key).await?
        else {
            return Ok(String::new());
        };

        Ok(self
            .exec
            .exec(&container, &[self.config.tool.as_str(), "show", name])
            .await?)
    }

    /// Content of the pull log for `name`, or `None` if no pull was recorded.
    ///
    /// Does not require the runtime to be running.
    pub async fn load_pull_log(&self, name: &str) -> Result<Option<String>, CoreError> {
        check_model_name(name)?;

        let path = job_log_path(&self.config.job_log_dir(), name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::io(&path, &e)),
        }
    }
}
