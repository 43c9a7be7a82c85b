//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (container runtime, filesystem, web server).
//!
//! # Structure
//!
//! - `model` - Model listing types (`ModelRecord`, `ModelPage`, `ListQuery`)
//! - `listing` - Pure parsing/reconciliation of runtime listings
//! - `install` - Installed application status (`InstallInfo`)
//! - `binding` - Domain binding request/view types

mod binding;
mod install;
pub mod listing;
mod model;

pub use binding::{BindDomainRequest, BindingView, UpdateBindingRequest};
pub use install::{InstallInfo, InstallStatus};
pub use listing::{
    filter_by_name, merge_job_logs, normalize_model_name, paginate, parse_listing,
};
pub use model::{ListQuery, ModelPage, ModelRecord, PullStatus};
