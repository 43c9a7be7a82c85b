//! Command handlers.
//!
//! Each handler takes the composed [`crate::CliContext`] and delegates to the
//! core facade; only rendering happens here.

pub mod list;
pub mod log;
pub mod pull;
pub mod remove;
pub mod show;
