//! Pull job-log locations.
//!
//! Every pull writes to `<data_root>/log/AITools/<sanitized name>`. The
//! directory doubles as the record of which models a user asked for.

use std::path::{Path, PathBuf};

use crate::domain::normalize_model_name;

/// Job-log directory relative to the data root.
pub const JOB_LOG_SUBDIR: &str = "log/AITools";

/// Directory holding one log file per pulled model.
#[must_use]
pub fn job_log_dir(data_root: &Path) -> PathBuf {
    JOB_LOG_SUBDIR
        .split('/')
        .fold(data_root.to_path_buf(), |dir, part| dir.join(part))
}

/// File name of the job log for `model_name` (`llama2:7b` → `llama2-7b`).
#[must_use]
pub fn job_log_file_name(model_name: &str) -> String {
    normalize_model_name(model_name)
}

/// Full path of the job log for `model_name` inside `log_dir`.
#[must_use]
pub fn job_log_path(log_dir: &Path, model_name: &str) -> PathBuf {
    log_dir.join(job_log_file_name(model_name))
}
