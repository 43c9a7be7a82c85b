//! Hand-written port fakes shared by the service tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::domain::{InstallInfo, InstallStatus};
use crate::ports::{AppInstallPort, ContainerExecPort, ExecError, RepositoryError};

pub const LISTING: &str = "NAME            ID              SIZE      MODIFIED\n\
                           llama2:latest   78e26419b446    3.8 GB    2 days ago\n\
                           qwen2.5:7b      845dbda0ea48    4.7 GB    5 weeks ago\n";

pub const CONTAINER: &str = "1Panel-ollama-abcd";

pub struct FakeInstalls {
    info: Option<InstallInfo>,
}

impl FakeInstalls {
    fn with_status(status: InstallStatus) -> Self {
        Self {
            info: Some(InstallInfo {
                id: 1,
                key: "ollama".to_string(),
                container_name: CONTAINER.to_string(),
                status,
            }),
        }
    }

    pub fn running() -> Self {
        Self::with_status(InstallStatus::Running)
    }

    pub fn stopped() -> Self {
        Self::with_status(InstallStatus::Stopped)
    }

    pub fn missing() -> Self {
        Self { info: None }
    }
}

#[async_trait]
impl AppInstallPort for FakeInstalls {
    async fn load_base_info(&self, app_key: &str) -> Result<InstallInfo, RepositoryError> {
        self.info
            .clone()
            .ok_or_else(|| RepositoryError::NotFound(format!("app={app_key}")))
    }

    async fn get_by_id(&self, id: u64) -> Result<InstallInfo, RepositoryError> {
        self.info
            .clone()
            .filter(|i| i.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("id={id}")))
    }
}

/// Container exec fake that records every argument vector it receives.
pub struct FakeExec {
    listing: String,
    fail_list: bool,
    fail_rm: bool,
    pull_output: String,
    fail_pull: bool,
    pull_delay: Option<Duration>,
    calls: Mutex<Vec<Vec<String>>>,
    containers: Mutex<Vec<String>>,
}

impl FakeExec {
    pub fn with_listing(listing: &str) -> Self {
        Self {
            listing: listing.to_string(),
            fail_list: false,
            fail_rm: false,
            pull_output: "pulling manifest\nsuccess\n".to_string(),
            fail_pull: false,
            pull_delay: None,
            calls: Mutex::new(Vec::new()),
            containers: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_rm(mut self) -> Self {
        self.fail_rm = true;
        self
    }

    pub fn failing_pull(mut self, output: &str) -> Self {
        self.fail_pull = true;
        self.pull_output = output.to_string();
        self
    }

    pub fn slow_pull(mut self, delay: Duration) -> Self {
        self.pull_delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn containers(&self) -> Vec<String> {
        self.containers.lock().unwrap().clone()
    }

    fn record(&self, container: &str, args: &[&str]) {
        self.containers.lock().unwrap().push(container.to_string());
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(ToString::to_string).collect());
    }

    fn failure(args: &[&str], output: &str) -> ExecError {
        ExecError::NonZeroExit {
            command: args.join(" "),
            status: "exit status: 1".to_string(),
            output: output.to_string(),
        }
    }
}

#[async_trait]
impl ContainerExecPort for FakeExec {
    async fn exec(&self, container: &str, args: &[&str]) -> Result<String, ExecError> {
        self.record(container, args);
        match args.get(1).copied() {
            Some("list") if self.fail_list => Err(Self::failure(args, "daemon not reachable")),
            Some("list") => Ok(self.listing.clone()),
            Some("rm") if self.fail_rm => Err(Self::failure(args, "model is in use")),
            Some("rm") => Ok(format!("deleted '{}'\n", args[2])),
            Some("show") => Ok(format!("  Model\n    architecture    llama\n    name    {}\n", args[2])),
            _ => Err(Self::failure(args, "unknown command")),
        }
    }

    async fn exec_streaming(
        &self,
        container: &str,
        args: &[&str],
        sink: &mut File,
    ) -> Result<(), ExecError> {
        self.record(container, args);
        if let Some(delay) = self.pull_delay {
            tokio::time::sleep(delay).await;
        }
        sink.write_all(self.pull_output.as_bytes())
            .await
            .map_err(|e| ExecError::Io {
                command: args.join(" "),
                reason: e.to_string(),
            })?;
        if self.fail_pull {
            return Err(Self::failure(args, ""));
        }
        Ok(())
    }
}
