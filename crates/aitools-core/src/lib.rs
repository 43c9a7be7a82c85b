//! Core domain, ports and services for managing models inside a containerized
//! inference runtime and exposing that runtime through a reverse-proxy binding.
//!
//! Adapters (Docker, CLI, HTTP) depend on this crate; this crate depends on no
//! adapter. All infrastructure is reached through the traits in [`ports`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    BindDomainRequest, BindingView, InstallInfo, InstallStatus, ListQuery, ModelPage,
    ModelRecord, PullStatus, UpdateBindingRequest, parse_listing,
};
pub use ports::{
    AppInstallPort, ContainerExecPort, CoreError, ExecError, HttpConfig, HttpsOp,
    RepositoryError, Website, WebsiteCreate, WebsiteError, WebsitePort,
};
pub use services::{
    AiToolService, DomainBindingService, ModelDetailService, ModelListingService,
    ModelRemovalService, PullJob, PullJobRunner, PullOutcome,
};
pub use settings::AiToolsConfig;

pub use paths::{
    JOB_LOG_SUBDIR, PathError, data_root, ensure_directory, job_log_dir, job_log_file_name,
    job_log_path,
};

#[cfg(test)]
use serde_json as _;
