//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use aitools_core::settings::{DEFAULT_APP_KEY, DEFAULT_TOOL};
use aitools_runtime::DEFAULT_DOCKER_BINARY;
use clap::Parser;

use crate::commands::Commands;

/// Container name used when none is configured.
pub const DEFAULT_CONTAINER: &str = "1Panel-ollama";

/// Manage models inside a containerized inference runtime.
#[derive(Parser)]
#[command(name = "aitools")]
#[command(about = "List, pull and remove models of a containerized AI runtime")]
#[command(version)]
pub struct Cli {
    /// Data directory holding the pull job logs
    #[arg(long = "data-dir", env = "AITOOLS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Container running the runtime
    #[arg(long, env = "AITOOLS_CONTAINER", default_value = DEFAULT_CONTAINER, global = true)]
    pub container: String,

    /// Application key of the runtime
    #[arg(long = "app-key", env = "AITOOLS_APP_KEY", default_value = DEFAULT_APP_KEY, global = true)]
    pub app_key: String,

    /// Runtime CLI invoked inside the container
    #[arg(long, env = "AITOOLS_TOOL", default_value = DEFAULT_TOOL, global = true)]
    pub tool: String,

    /// Docker-compatible binary
    #[arg(long, env = "AITOOLS_DOCKER", default_value = DEFAULT_DOCKER_BINARY, global = true)]
    pub docker: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
