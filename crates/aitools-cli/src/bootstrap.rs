//! CLI bootstrap - the composition root.
//!
//! The only place where the Docker adapters are instantiated and handed to
//! the core services. Handlers receive the composed [`CliContext`].

use std::path::PathBuf;
use std::sync::Arc;

use aitools_core::{AiToolService, AiToolsConfig, data_root};
use aitools_runtime::{DockerExec, DockerInstallProbe};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory; the platform default when unset.
    pub data_dir: Option<PathBuf>,
    /// Container running the runtime.
    pub container: String,
    /// Application key of the runtime.
    pub app_key: String,
    /// Runtime CLI inside the container.
    pub tool: String,
    /// Docker-compatible binary.
    pub docker: PathBuf,
}

impl CliConfig {
    /// Take the configuration from parsed arguments (flags, then env).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            container: cli.container.clone(),
            app_key: cli.app_key.clone(),
            tool: cli.tool.clone(),
            docker: cli.docker.clone(),
        }
    }

    fn resolve(&self) -> Result<AiToolsConfig, CliError> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => data_root().map_err(|e| CliError::Config(e.to_string()))?,
        };
        Ok(AiToolsConfig::new(data_dir)
            .with_app_key(&self.app_key)
            .with_tool(&self.tool))
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    app: AiToolService,
}

impl CliContext {
    /// Access the core facade.
    pub const fn app(&self) -> &AiToolService {
        &self.app
    }
}

/// Bootstrap the CLI application.
///
/// Pull output is mirrored to stdout so `aitools pull` shows progress.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let settings = config.resolve()?;
    debug!(
        data_dir = %settings.data_dir().display(),
        container = %config.container,
        "bootstrapping"
    );

    let installs = Arc::new(
        DockerInstallProbe::with_binary(&config.docker)
            .register(&settings.app_key, &config.container),
    );
    let exec = Arc::new(DockerExec::with_binary(&config.docker).with_mirror_stdout(true));

    Ok(CliContext {
        app: AiToolService::new(installs, exec, Arc::new(settings)),
    })
}
