//! Data root resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "AITOOLS_DATA_DIR";

/// Get the root directory for application data (job logs, config).
///
/// Resolution order:
/// 1. `AITOOLS_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/aitools`)
///
/// The directory is not created here; writers ensure the subdirectory they need.
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("aitools"))
}
