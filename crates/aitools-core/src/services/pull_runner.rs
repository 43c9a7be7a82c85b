//! Pull job runner - starts model pulls in the background.
//!
//! A pull can take as long as a multi-gigabyte download, so `create` only
//! prepares the job log and spawns a task; the task streams the runtime's
//! output into the log and appends a terminal marker when it finishes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::runtime_gate::running_container;
use crate::domain::PullStatus;
use crate::paths::{ensure_directory, job_log_file_name, job_log_path};
use crate::ports::{AppInstallPort, ContainerExecPort, CoreError};
use crate::settings::AiToolsConfig;
use crate::utils::validation::check_model_name;

/// Terminal result of a pull job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    Succeeded,
    Failed,
}

impl From<PullOutcome> for PullStatus {
    fn from(outcome: PullOutcome) -> Self {
        match outcome {
            PullOutcome::Succeeded => Self::Succeeded,
            PullOutcome::Failed => Self::Failed,
        }
    }
}

/// Handle to a running pull.
///
/// Dropping the handle detaches the job; it keeps running and the log file
/// still receives its terminal marker.
#[derive(Debug)]
pub struct PullJob {
    name: String,
    log_path: PathBuf,
    handle: JoinHandle<PullOutcome>,
}

impl PullJob {
    /// Model being pulled.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Log file receiving the pull output.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Whether the background task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the job to finish. A panicked job counts as failed.
    pub async fn wait(self) -> PullOutcome {
        self.handle.await.unwrap_or(PullOutcome::Failed)
    }
}

type InFlight = Arc<Mutex<HashMap<String, usize>>>;

/// Tracks one running pull task, keyed by its job-log file name.
///
/// Names sharing a log file (`llama2:7b`, `llama2-7b`) share a key.
/// Same-key pulls are not rejected; the count only lets a restart be reported.
struct InFlightGuard {
    registry: InFlight,
    name: String,
}

impl InFlightGuard {
    fn acquire(registry: &InFlight, model: &str) -> Self {
        let name = job_log_file_name(model);
        let mut running = registry.lock().unwrap_or_else(PoisonError::into_inner);
        let count = running.entry(name.clone()).or_insert(0);
        if *count > 0 {
            warn!(
                model = %model,
                log = %name,
                running = *count,
                "restarting pull while a previous pull writing this log is still running"
            );
        }
        *count += 1;
        Self {
            registry: Arc::clone(registry),
            name,
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut running = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(count) = running.get_mut(&self.name) {
            *count -= 1;
            if *count == 0 {
                running.remove(&self.name);
            }
        }
    }
}

/// Starts pulls and keeps track of which ones are still running.
pub struct PullJobRunner {
    installs: Arc<dyn AppInstallPort>,
    exec: Arc<dyn ContainerExecPort>,
    config: Arc<AiToolsConfig>,
    in_flight: InFlight,
}

impl PullJobRunner {
    /// Create a new pull runner.
    pub fn new(
        installs: Arc<dyn AppInstallPort>,
        exec: Arc<dyn ContainerExecPort>,
        config: Arc<AiToolsConfig>,
    ) -> Self {
        Self {
            installs,
            exec,
            config,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start pulling `name` in the background.
    ///
    /// Returns once the job log is truncated and the task is spawned, without
    /// waiting for the pull. `Ok(None)` means the runtime is not running and
    /// nothing was started. Must be called from within a tokio runtime.
    pub async fn create(&self, name: &str) -> Result<Option<PullJob>, CoreError> {
        check_model_name(name)?;

        let Some(container) =
            running_container(self.installs.as_ref(), &self.config.app_key).await?
        else {
            return Ok(None);
        };

        let log_dir = self.config.job_log_dir();
        ensure_directory(&log_dir).await?;
        let log_path = job_log_path(&log_dir, name);
        let log = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&log_path)
            .await
            .map_err(|e| CoreError::io(&log_path, &e))?;

        let guard = InFlightGuard::acquire(&self.in_flight, name);
        let exec = Arc::clone(&self.exec);
        let tool = self.config.tool.clone();
        let model = name.to_string();

        let handle = tokio::spawn(async move {
            let _guard = guard;
            run_pull(exec.as_ref(), &container, &tool, &model, log).await
        });

        info!(model = %name, log = %log_path.display(), "started model pull");
        Ok(Some(PullJob {
            name: name.to_string(),
            log_path,
            handle,
        }))
    }

    /// Whether a pull writing the job log of `name` is currently running.
    #[must_use]
    pub fn is_in_flight(&self, name: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&job_log_file_name(name))
    }

    /// Job-log names with a running pull task, sorted.
    #[must_use]
    pub fn in_flight(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

/// Body of the background task. Owns the log file; it is closed when this returns.
async fn run_pull(
    exec: &dyn ContainerExecPort,
    container: &str,
    tool: &str,
    model: &str,
    mut log: File,
) -> PullOutcome {
    let result = exec
        .exec_streaming(container, &[tool, "run", model], &mut log)
        .await;

    let (outcome, marker) = match result {
        Ok(()) => {
            info!(model = %model, "{tool} pull {model} successful!");
            (PullOutcome::Succeeded, PullStatus::SUCCESS_MARKER)
        }
        Err(e) => {
            error!(model = %model, error = %e, "{tool} pull {model} failed");
            (PullOutcome::Failed, PullStatus::FAILURE_MARKER)
        }
    };

    let line = format!("{tool} {marker}\n");
    if let Err(e) = log.write_all(line.as_bytes()).await {
        warn!(model = %model, error = %e, "failed to write pull marker");
    }
    if let Err(e) = log.flush().await {
        warn!(model = %model, error = %e, "failed to flush pull log");
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{FakeExec, FakeInstalls, LISTING};
    use std::time::Duration;
    use tempfile::TempDir;

    fn runner(installs: FakeInstalls, exec: Arc<FakeExec>, data_dir: &Path) -> PullJobRunner {
        PullJobRunner::new(
            Arc::new(installs),
            exec,
            Arc::new(AiToolsConfig::new(data_dir)),
        )
    }

    async fn wait_for_marker(path: &Path) -> String {
        for _ in 0..200 {
            let content = tokio::fs::read_to_string(path).await.unwrap_or_default();
            if PullStatus::from_log(&content) != PullStatus::Running {
                return content;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("no terminal marker in {}", path.display());
    }

    #[tokio::test]
    async fn illegal_name_starts_nothing() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING));
        let runner = runner(FakeInstalls::running(), Arc::clone(&exec), temp.path());

        let err = runner.create("bad;name").await.unwrap_err();

        assert!(matches!(err, CoreError::IllegalInput(_)));
        assert!(exec.calls().is_empty());
        assert!(!temp.path().join("log").exists());
    }

    #[tokio::test]
    async fn stopped_runtime_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING));
        let runner = runner(FakeInstalls::stopped(), Arc::clone(&exec), temp.path());

        assert!(runner.create("llama2").await.unwrap().is_none());
        assert!(exec.calls().is_empty());
        assert!(!temp.path().join("log").exists());
    }

    #[tokio::test]
    async fn returns_before_pull_completes() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING).slow_pull(Duration::from_millis(200)));
        let runner = runner(FakeInstalls::running(), Arc::clone(&exec), temp.path());

        let job = runner.create("llama2:7b").await.unwrap().unwrap();

        assert!(job.log_path().ends_with("log/AITools/llama2-7b"));
        assert!(job.log_path().exists());
        assert!(!job.is_finished());
        assert!(runner.is_in_flight("llama2:7b"));

        assert_eq!(job.wait().await, PullOutcome::Succeeded);
        assert!(runner.in_flight().is_empty());
        assert_eq!(exec.calls(), vec![vec!["ollama", "run", "llama2:7b"]]);
    }

    #[tokio::test]
    async fn success_appends_marker_after_output() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING));
        let runner = runner(FakeInstalls::running(), exec, temp.path());

        let job = runner.create("mistral").await.unwrap().unwrap();
        let path = job.log_path().to_path_buf();
        assert_eq!(job.wait().await, PullOutcome::Succeeded);

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "pulling manifest\nsuccess\nollama pull successful!\n");
    }

    #[tokio::test]
    async fn failure_appends_failure_marker() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(
            FakeExec::with_listing(LISTING).failing_pull("Error: pull model manifest: file does not exist\n"),
        );
        let runner = runner(FakeInstalls::running(), exec, temp.path());

        let job = runner.create("nope:1b").await.unwrap().unwrap();
        let path = job.log_path().to_path_buf();
        assert_eq!(job.wait().await, PullOutcome::Failed);

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Error: pull model manifest"));
        assert_eq!(PullStatus::from_log(&content), PullStatus::Failed);
    }

    #[tokio::test]
    async fn detached_job_still_finishes() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING).slow_pull(Duration::from_millis(50)));
        let runner = runner(FakeInstalls::running(), exec, temp.path());

        let job = runner.create("phi3").await.unwrap().unwrap();
        let path = job.log_path().to_path_buf();
        drop(job);

        let content = wait_for_marker(&path).await;
        assert!(content.ends_with("ollama pull successful!\n"));
    }

    #[tokio::test]
    async fn restart_truncates_previous_log() {
        let temp = TempDir::new().unwrap();
        let log_dir = AiToolsConfig::new(temp.path()).job_log_dir();
        std::fs::create_dir_all(&log_dir).unwrap();
        std::fs::write(log_dir.join("llama2"), "old output\nollama pull failed!").unwrap();

        let exec = Arc::new(FakeExec::with_listing(LISTING).slow_pull(Duration::from_millis(100)));
        let runner = runner(FakeInstalls::running(), exec, temp.path());

        let job = runner.create("llama2").await.unwrap().unwrap();
        assert_eq!(std::fs::metadata(job.log_path()).unwrap().len(), 0);
        job.wait().await;

        let content = std::fs::read_to_string(log_dir.join("llama2")).unwrap();
        assert!(!content.contains("old output"));
    }

    #[tokio::test]
    async fn concurrent_same_name_pulls_both_run() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING).slow_pull(Duration::from_millis(50)));
        let runner = runner(FakeInstalls::running(), Arc::clone(&exec), temp.path());

        let first = runner.create("llama2").await.unwrap().unwrap();
        let second = runner.create("llama2").await.unwrap().unwrap();
        assert!(runner.is_in_flight("llama2"));

        first.wait().await;
        second.wait().await;
        assert!(!runner.is_in_flight("llama2"));
        assert_eq!(exec.calls().len(), 2);
    }

    #[tokio::test]
    async fn names_sharing_a_log_file_share_one_in_flight_entry() {
        let temp = TempDir::new().unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING).slow_pull(Duration::from_millis(100)));
        let runner = runner(FakeInstalls::running(), Arc::clone(&exec), temp.path());

        let tagged = runner.create("llama2:7b").await.unwrap().unwrap();
        let dashed = runner.create("llama2-7b").await.unwrap().unwrap();
        assert_eq!(tagged.log_path(), dashed.log_path());
        assert_eq!(runner.in_flight(), vec!["llama2-7b"]);
        assert!(runner.is_in_flight("llama2:7b"));

        tagged.wait().await;
        dashed.wait().await;
        assert!(runner.in_flight().is_empty());
        assert_eq!(exec.calls().len(), 2);
    }

    #[tokio::test]
    async fn unwritable_log_dir_is_fatal() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("data");
        std::fs::write(&data_dir, b"not a directory").unwrap();
        let exec = Arc::new(FakeExec::with_listing(LISTING));
        let runner = runner(FakeInstalls::running(), Arc::clone(&exec), &data_dir);

        let err = runner.create("llama2").await.unwrap_err();

        assert!(matches!(err, CoreError::Path(_)));
        assert!(exec.calls().is_empty());
    }
}
