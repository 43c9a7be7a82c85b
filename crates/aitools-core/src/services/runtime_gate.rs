//! Resolution of the runtime container shared by the model services.

use tracing::debug;

use crate::domain::{ModelRecord, parse_listing};
use crate::ports::{AppInstallPort, ContainerExecPort, CoreError};

/// Container name of the runtime if it is installed and running.
///
/// A missing installation is an error; an installed but stopped runtime is
/// `Ok(None)` so callers can degrade to an empty result.
pub(crate) async fn running_container(
    installs: &dyn AppInstallPort,
    app_key: &str,
) -> Result<Option<String>, CoreError> {
    let info = installs.load_base_info(app_key).await?;
    if !info.is_running() {
        debug!(app = %app_key, status = ?info.status, "runtime not running, skipping");
        return Ok(None);
    }
    Ok(Some(info.container_name))
}

/// Models currently known to the runtime, without job-log placeholders.
pub(crate) async fn live_models(
    exec: &dyn ContainerExecPort,
    container: &str,
    tool: &str,
) -> Result<Vec<ModelRecord>, CoreError> {
    let stdout = exec.exec(container, &[tool, "list"]).await?;
    Ok(parse_listing(&stdout))
}
