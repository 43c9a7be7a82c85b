//! `AiToolService` - the facade adapters talk to.
//!
//! Built once at the composition root from the concrete ports; every service
//! shares the same [`AiToolsConfig`].

use std::sync::Arc;

use crate::ports::{AppInstallPort, ContainerExecPort, WebsitePort};
use crate::settings::AiToolsConfig;

use super::{
    DomainBindingService, ModelDetailService, ModelListingService, ModelRemovalService,
    PullJobRunner,
};

/// Facade over the model lifecycle and domain binding services.
///
/// # Example
///
/// ```ignore
/// let config = Arc::new(AiToolsConfig::with_defaults()?);
/// let core = AiToolService::new(installs, Arc::new(DockerExec::new()), config);
///
/// let page = core.listing().search(&ListQuery::default()).await?;
/// ```
pub struct AiToolService {
    config: Arc<AiToolsConfig>,
    listing: ModelListingService,
    pulls: PullJobRunner,
    removal: ModelRemovalService,
    detail: ModelDetailService,
    bindings: Option<DomainBindingService>,
}

impl AiToolService {
    /// Create the model lifecycle services over the given ports.
    pub fn new(
        installs: Arc<dyn AppInstallPort>,
        exec: Arc<dyn ContainerExecPort>,
        config: Arc<AiToolsConfig>,
    ) -> Self {
        Self {
            listing: ModelListingService::new(
                Arc::clone(&installs),
                Arc::clone(&exec),
                Arc::clone(&config),
            ),
            pulls: PullJobRunner::new(
                Arc::clone(&installs),
                Arc::clone(&exec),
                Arc::clone(&config),
            ),
            removal: ModelRemovalService::new(
                Arc::clone(&installs),
                Arc::clone(&exec),
                Arc::clone(&config),
            ),
            detail: ModelDetailService::new(Arc::clone(&installs), exec, Arc::clone(&config)),
            bindings: None,
            config,
        }
    }

    /// Enable domain binding on top of a website subsystem.
    ///
    /// Adapters without a reverse proxy (the CLI) skip this.
    #[must_use]
    pub fn with_websites(
        mut self,
        installs: Arc<dyn AppInstallPort>,
        websites: Arc<dyn WebsitePort>,
    ) -> Self {
        self.bindings = Some(DomainBindingService::new(
            installs,
            websites,
            Arc::clone(&self.config),
        ));
        self
    }

    /// Shared configuration.
    pub fn config(&self) -> &AiToolsConfig {
        &self.config
    }

    /// Listing reconciler.
    pub const fn listing(&self) -> &ModelListingService {
        &self.listing
    }

    /// Background pull runner.
    pub const fn pulls(&self) -> &PullJobRunner {
        &self.pulls
    }

    /// Removal coordinator.
    pub const fn removal(&self) -> &ModelRemovalService {
        &self.removal
    }

    /// `show` output and pull log read-back.
    pub const fn detail(&self) -> &ModelDetailService {
        &self.detail
    }

    /// Domain binding manager, if a website subsystem was attached.
    pub const fn bindings(&self) -> Option<&DomainBindingService> {
        self.bindings.as_ref()
    }
}
