//! `ContainerExecPort` implementation over `docker exec`.

use std::path::PathBuf;

use aitools_core::{ContainerExecPort, ExecError};
use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::docker::{DEFAULT_DOCKER_BINARY, DockerCli, exec_args};

const CHUNK_SIZE: usize = 8 * 1024;

/// Runs runtime commands inside a container with `docker exec`.
///
/// Arguments are passed as an argument vector; nothing goes through a shell.
#[derive(Debug, Clone)]
pub struct DockerExec {
    docker: DockerCli,
    mirror_stdout: bool,
}

impl Default for DockerExec {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerExec {
    /// Use `docker` from `PATH`.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_DOCKER_BINARY)
    }

    /// Use a specific docker-compatible binary.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            docker: DockerCli::new(binary),
            mirror_stdout: false,
        }
    }

    /// Also copy streamed output to this process's stdout.
    #[must_use]
    pub const fn with_mirror_stdout(mut self, mirror: bool) -> Self {
        self.mirror_stdout = mirror;
        self
    }
}

#[async_trait]
impl ContainerExecPort for DockerExec {
    async fn exec(&self, container: &str, args: &[&str]) -> Result<String, ExecError> {
        let full = exec_args(container, args);
        debug!(command = %self.docker.describe(&full), "docker exec");
        self.docker.capture(&full).await
    }

    async fn exec_streaming(
        &self,
        container: &str,
        args: &[&str],
        sink: &mut File,
    ) -> Result<(), ExecError> {
        let full = exec_args(container, args);
        let command = self.docker.describe(&full);
        debug!(command = %command, "docker exec (streaming)");

        let mut child = self
            .docker
            .command(&full)
            .spawn()
            .map_err(|e| ExecError::Launch {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        let (tx, mut rx) = mpsc::channel::<Vec<u8>>(64);
        if let Some(stdout) = child.stdout.take() {
            forward_chunks(stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            forward_chunks(stderr, tx.clone());
        }
        drop(tx);

        let mut console = self.mirror_stdout.then(tokio::io::stdout);
        while let Some(chunk) = rx.recv().await {
            if let Err(e) = sink.write_all(&chunk).await {
                if let Err(kill_err) = child.start_kill() {
                    warn!(command = %command, error = %kill_err, "failed to kill docker exec");
                }
                return Err(ExecError::Io {
                    command,
                    reason: e.to_string(),
                });
            }
            if let Some(out) = console.as_mut() {
                if let Err(e) = out.write_all(&chunk).await {
                    warn!(command = %command, error = %e, "stopped mirroring to stdout");
                    console = None;
                }
            }
        }
        if let Some(out) = console.as_mut() {
            if let Err(e) = out.flush().await {
                warn!(command = %command, error = %e, "failed to flush stdout");
            }
        }

        let status = child.wait().await.map_err(|e| ExecError::Io {
            command: command.clone(),
            reason: e.to_string(),
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(ExecError::NonZeroExit {
                command,
                status: status.to_string(),
                output: String::new(),
            })
        }
    }
}

/// Copy a child pipe into the channel until EOF or the receiver goes away.
fn forward_chunks<R>(mut reader: R, tx: mpsc::Sender<Vec<u8>>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            match reader.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).await.is_err() {
                        break;
                    }
                }
            }
        }
    });
}
