//! Domain binding service - exposes the runtime through a reverse-proxy host.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{BindDomainRequest, BindingView, UpdateBindingRequest};
use crate::ports::{AppInstallPort, CoreError, HttpsOp, WebsiteCreate, WebsitePort};
use crate::settings::AiToolsConfig;

/// Service creating and updating the virtual host in front of an installation.
///
/// TLS is driven only by the certificate ID: non-zero enables HTTPS with that
/// certificate, and clearing it on a host that has one disables HTTPS.
pub struct DomainBindingService {
    installs: Arc<dyn AppInstallPort>,
    websites: Arc<dyn WebsitePort>,
    config: Arc<AiToolsConfig>,
}

impl DomainBindingService {
    /// Create a new binding service.
    pub fn new(
        installs: Arc<dyn AppInstallPort>,
        websites: Arc<dyn WebsitePort>,
        config: Arc<AiToolsConfig>,
    ) -> Self {
        Self {
            installs,
            websites,
            config,
        }
    }

    async fn ensure_proxy_installed(&self) -> Result<(), CoreError> {
        let key = &self.config.proxy_app_key;
        match self.installs.load_base_info(key).await {
            Ok(install) if install.id != 0 => Ok(()),
            Ok(_) => Err(CoreError::ReverseProxyNotInstalled(key.clone())),
            Err(e) => {
                debug!(app = %key, error = %e, "reverse proxy lookup failed");
                Err(CoreError::ReverseProxyNotInstalled(key.clone()))
            }
        }
    }

    /// Create a virtual host for `req.domain` in front of `req.app_install_id`.
    ///
    /// Steps run in order and stop at the first failure; a host created
    /// before a later step fails is left in place.
    pub async fn bind(&self, req: &BindDomainRequest) -> Result<(), CoreError> {
        self.ensure_proxy_installed().await?;

        let create = WebsiteCreate::deployment(&req.domain, req.app_install_id);
        let alias = create.alias.clone();
        self.websites.create_website(create).await?;

        let website = self.websites.find_by_alias(&alias).await?;
        self.websites
            .apply_allow_list(&req.allow_ips, &website)
            .await?;

        if req.ssl_id > 0 {
            self.websites
                .op_https(HttpsOp::enable_existing(website.id, req.ssl_id))
                .await?;
        }

        info!(
            domain = %req.domain,
            website_id = website.id,
            app_install_id = req.app_install_id,
            tls = req.ssl_id > 0,
            "bound domain"
        );
        Ok(())
    }

    /// Current binding of an installation; all-zero if it has no host.
    pub async fn get_binding(&self, app_install_id: u64) -> Result<BindingView, CoreError> {
        let install = self.installs.get_by_id(app_install_id).await?;
        let Some(website) = self.websites.find_by_app_install(install.id).await? else {
            return Ok(BindingView::default());
        };

        let allow_ips = self.websites.get_allow_list(&website).await?;
        Ok(BindingView {
            website_id: website.id,
            domain: website.primary_domain,
            ssl_id: website.website_ssl_id,
            allow_ips,
        })
    }

    /// Update the allow-list and TLS state of an existing host.
    pub async fn update_binding(&self, req: &UpdateBindingRequest) -> Result<(), CoreError> {
        self.ensure_proxy_installed().await?;

        let website = self.websites.find_by_id(req.website_id).await?;
        self.websites
            .apply_allow_list(&req.allow_ips, &website)
            .await?;

        if req.ssl_id > 0 {
            self.websites
                .op_https(HttpsOp::enable_existing(website.id, req.ssl_id))
                .await?;
            info!(website_id = website.id, ssl_id = req.ssl_id, "enabled https");
            return Ok(());
        }

        if website.website_ssl_id > 0 {
            self.websites
                .op_https(HttpsOp::disable(website.id))
                .await?;
            info!(website_id = website.id, "disabled https");
        }

        Ok(())
    }
}
