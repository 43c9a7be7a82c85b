//! Runtime configuration shared by all services.
//!
//! One `AiToolsConfig` value is built at the composition root and handed to
//! each service; nothing reads process-wide globals after that.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths::{PathError, data_root, job_log_dir};

/// Default application key of the inference runtime.
pub const DEFAULT_APP_KEY: &str = "ollama";

/// Default application key of the reverse proxy.
pub const DEFAULT_PROXY_APP_KEY: &str = "openresty";

/// Default runtime CLI invoked inside the container.
pub const DEFAULT_TOOL: &str = "ollama";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiToolsConfig {
    /// Root for job logs and other persisted state.
    pub data_dir: PathBuf,
    /// Install registry key of the inference runtime.
    pub app_key: String,
    /// Install registry key of the reverse proxy.
    pub proxy_app_key: String,
    /// CLI inside the runtime container (`<tool> list`, `<tool> run`, ...).
    pub tool: String,
}

impl AiToolsConfig {
    /// Configuration rooted at `data_dir` with default keys.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            app_key: DEFAULT_APP_KEY.to_string(),
            proxy_app_key: DEFAULT_PROXY_APP_KEY.to_string(),
            tool: DEFAULT_TOOL.to_string(),
        }
    }

    /// Configuration rooted at the resolved data root.
    pub fn with_defaults() -> Result<Self, PathError> {
        Ok(Self::new(data_root()?))
    }

    /// Set the runtime's application key.
    #[must_use]
    pub fn with_app_key(mut self, key: impl Into<String>) -> Self {
        self.app_key = key.into();
        self
    }

    /// Set the runtime CLI name.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Directory holding pull job logs.
    #[must_use]
    pub fn job_log_dir(&self) -> PathBuf {
        job_log_dir(&self.data_dir)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for AiToolsConfig {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}
