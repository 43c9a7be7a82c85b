//! Core services - the business logic layer.
//!
//! Services orchestrate between ports and domain logic. They never see a
//! concrete adapter; everything external arrives as an `Arc<dyn Port>`.

mod ai_tool_service;
mod domain_binding;
mod job_log;
mod model_detail;
mod model_listing;
mod model_removal;
mod pull_runner;
mod runtime_gate;

#[cfg(test)]
mod test_support;

pub use ai_tool_service::AiToolService;
pub use domain_binding::DomainBindingService;
pub use model_detail::ModelDetailService;
pub use model_listing::ModelListingService;
pub use model_removal::ModelRemovalService;
pub use pull_runner::{PullJob, PullJobRunner, PullOutcome};
