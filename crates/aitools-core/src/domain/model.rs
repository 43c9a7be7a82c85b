//! Model listing domain types.

use serde::{Deserialize, Serialize};

/// Placeholder value used for size/modified of models only known from a job log.
pub const PLACEHOLDER_FIELD: &str = "-";

/// A model as reported by the runtime, or a placeholder for a pull that has
/// not (yet) surfaced in the live listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Canonical runtime identifier, possibly with a `:tag` suffix.
    pub name: String,
    /// Human readable size, e.g. `3.8 GB`.
    pub size: String,
    /// Human readable modification age, e.g. `2 days ago`.
    pub modified: String,
    /// Outcome of the last pull, only set for placeholder records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_status: Option<PullStatus>,
}

impl ModelRecord {
    /// Create a record for a model present in the live listing.
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        modified: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            modified: modified.into(),
            pull_status: None,
        }
    }

    /// Create a placeholder record for a model only known from its job log.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, PLACEHOLDER_FIELD, PLACEHOLDER_FIELD)
    }

    /// Whether this record was synthesized from the job-log directory.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.size == PLACEHOLDER_FIELD && self.modified == PLACEHOLDER_FIELD
    }
}

/// State of a pull job, derived from the trailing marker of its log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PullStatus {
    /// No terminal marker yet.
    Running,
    /// The log ends with the success marker.
    Succeeded,
    /// The log ends with the failure marker.
    Failed,
}

impl PullStatus {
    /// Suffix appended to a job log when the pull command succeeds.
    pub const SUCCESS_MARKER: &'static str = "pull successful!";
    /// Suffix appended to a job log when the pull command fails.
    pub const FAILURE_MARKER: &'static str = "pull failed!";

    /// Classify a job log by its trailing marker line.
    #[must_use]
    pub fn from_log(content: &str) -> Self {
        let tail = content.trim_end();
        if tail.ends_with(Self::SUCCESS_MARKER) {
            Self::Succeeded
        } else if tail.ends_with(Self::FAILURE_MARKER) {
            Self::Failed
        } else {
            Self::Running
        }
    }
}

/// Search parameters for a model listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Case-sensitive substring filter on the model name; empty means no filter.
    #[serde(default)]
    pub info: String,
    /// 1-based page number.
    pub page: usize,
    /// Number of records per page.
    pub page_size: usize,
}

impl ListQuery {
    /// Create an unfiltered query.
    #[must_use]
    pub const fn new(page: usize, page_size: usize) -> Self {
        Self {
            info: String::new(),
            page,
            page_size,
        }
    }

    /// Restrict the listing to names containing `info`.
    #[must_use]
    pub fn with_filter(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPage {
    /// Number of records after filtering, before pagination.
    pub total: usize,
    /// Records of the requested page.
    pub items: Vec<ModelRecord>,
}

impl ModelPage {
    /// An empty page with zero total.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_status_reads_trailing_marker() {
        assert_eq!(
            PullStatus::from_log("pulling manifest\nollama pull successful!\n"),
            PullStatus::Succeeded
        );
        assert_eq!(
            PullStatus::from_log("Error: pull model manifest: file does not exist\nollama pull failed!"),
            PullStatus::Failed
        );
        assert_eq!(PullStatus::from_log("pulling 8934d96d3f08...  12%"), PullStatus::Running);
        assert_eq!(PullStatus::from_log(""), PullStatus::Running);
    }

    #[test]
    fn placeholder_detection() {
        assert!(ModelRecord::placeholder("mistral").is_placeholder());
        assert!(!ModelRecord::new("llama2", "3.8 GB", "2 days ago").is_placeholder());
    }

    #[test]
    fn record_serializes_without_status_for_live_models() {
        let json = serde_json::to_string(&ModelRecord::new("llama2", "3.8 GB", "now")).unwrap();
        assert_eq!(json, r#"{"name":"llama2","size":"3.8 GB","modified":"now"}"#);
    }
}
