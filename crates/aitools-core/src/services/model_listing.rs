//! Model listing service - reconciles the runtime listing with job logs.

use std::sync::Arc;

use tracing::debug;

use super::job_log;
use super::runtime_gate::{live_models, running_container};
use crate::domain::{ListQuery, ModelPage, filter_by_name, merge_job_logs, paginate};
use crate::paths::job_log_path;
use crate::ports::{AppInstallPort, ContainerExecPort, CoreError};
use crate::settings::AiToolsConfig;

/// Service answering "which models exist" for the runtime.
///
/// Models come from two places: the runtime's own `list` output, and the
/// job-log directory, which still remembers pulls that are in progress or
/// failed before the runtime learned about the model.
pub struct ModelListingService {
    installs: Arc<dyn AppInstallPort>,
    exec: Arc<dyn ContainerExecPort>,
    config: Arc<AiToolsConfig>,
}

impl ModelListingService {
    /// Create a new listing service.
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

    /// Search models by name, one page at a time.
    ///
    /// Returns an empty page when the runtime is installed but not running.
    pub async fn search(&self, query: &ListQuery) -> Result<ModelPage, CoreError> {
        let Some(container) =
            running_container(self.installs.as_ref(), &self.config.app_key).await?
        else {
            return Ok(ModelPage::empty());
        };

        let live = live_models(self.exec.as_ref(), &container, &self.config.tool).await?;
        let log_dir = self.config.job_log_dir();
        let entries = job_log::read_entries(&log_dir).await;
        debug!(live = live.len(), logs = entries.len(), "reconciling model listing");

        let merged = merge_job_logs(live, &entries);
        let filtered = filter_by_name(merged, &query.info);
        let mut page = paginate(filtered, query.page, query.page_size);

        for record in page.items.iter_mut().filter(|m| m.is_placeholder()) {
            record.pull_status = job_log::read_status(&job_log_path(&log_dir, &record.name)).await;
        }

        Ok(page)
    }
}
