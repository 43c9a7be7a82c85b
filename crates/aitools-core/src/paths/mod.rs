//! Path utilities for aitools data directories.
//!
//! This module provides the canonical path resolution for:
//! - The application data root
//! - The pull job-log directory and per-model log files
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;
mod job_logs;
mod platform;

#[cfg(test)]
mod test_utils;

pub use error::PathError;

pub use platform::data_root;

pub use ensure::ensure_directory;

pub use job_logs::{JOB_LOG_SUBDIR, job_log_dir, job_log_file_name, job_log_path};
