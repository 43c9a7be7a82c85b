//! Command builder for the `docker` CLI.

use std::path::PathBuf;
use std::process::Stdio;

use aitools_core::ExecError;
use tokio::process::Command;

/// Binary used when none is configured.
pub const DEFAULT_DOCKER_BINARY: &str = "docker";

/// Location of the `docker` CLI plus the helpers both adapters need.
#[derive(Debug, Clone)]
pub(crate) struct DockerCli {
    binary: PathBuf,
}

impl DockerCli {
    pub(crate) fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// `docker <args...>` with piped stdout/stderr and no stdin.
    pub(crate) fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Human-readable command line for errors and logs.
    pub(crate) fn describe(&self, args: &[&str]) -> String {
        let mut line = self.binary.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run to completion and return stdout, or the combined output on failure.
    pub(crate) async fn capture(&self, args: &[&str]) -> Result<String, ExecError> {
        let command = self.describe(args);
        let output = self
            .command(args)
            .output()
            .await
            .map_err(|e| ExecError::Launch {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(ExecError::NonZeroExit {
            command,
            status: output.status.to_string(),
            output: format!("{stdout}{stderr}"),
        })
    }
}

/// `exec <container> <args...>`
pub(crate) fn exec_args<'a>(container: &'a str, args: &[&'a str]) -> Vec<&'a str> {
    let mut full = Vec::with_capacity(args.len() + 2);
    full.push("exec");
    full.push(container);
    full.extend_from_slice(args);
    full
}
