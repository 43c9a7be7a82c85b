//! Installed application registry port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::InstallInfo;

/// Lookup of installed applications (the inference runtime, the reverse proxy).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppInstallPort: Send + Sync {
    /// Load the installation for an application key.
    ///
    /// Returns `RepositoryError::NotFound` when the application is not installed.
    async fn load_base_info(&self, app_key: &str) -> Result<InstallInfo, RepositoryError>;

    /// Load an installation by its registry ID.
    async fn get_by_id(&self, id: u64) -> Result<InstallInfo, RepositoryError>;
}
