//! Website / reverse-proxy subsystem port.
//!
//! Virtual-host persistence, config rendering and certificate storage all
//! live behind this trait. The core only issues create/lookup/update intents.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the website subsystem.
#[derive(Debug, Error)]
pub enum WebsiteError {
    /// No website matched the lookup.
    #[error("Website not found: {0}")]
    NotFound(String),

    /// A website for the domain already exists.
    #[error("Domain already bound: {0}")]
    DomainExists(String),

    /// The referenced certificate does not exist or cannot be used.
    #[error("Certificate {0} is not usable")]
    InvalidCertificate(u64),

    /// Any other failure inside the subsystem.
    #[error("Website operation failed: {0}")]
    Operation(String),
}

/// A virtual host as stored by the website subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: u64,
    pub primary_domain: String,
    pub alias: String,
    pub app_install_id: u64,
    /// Bound certificate, `0` when TLS is off.
    #[serde(rename = "webSiteSSLID")]
    pub website_ssl_id: u64,
}

/// Kind of website to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteType {
    /// Reverse proxy in front of a managed deployment.
    Deployment,
}

/// What a deployment website points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppType {
    /// An application already installed through the panel.
    InstalledApp,
}

/// Create intent for a deployment website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteCreate {
    pub primary_domain: String,
    pub alias: String,
    #[serde(rename = "type")]
    pub website_type: WebsiteType,
    pub app_type: AppType,
    pub app_install_id: u64,
}

impl WebsiteCreate {
    /// A deployment website for `domain` in front of installation `app_install_id`.
    ///
    /// The alias is the lowercased domain; it is also the lookup key afterwards.
    pub fn deployment(domain: &str, app_install_id: u64) -> Self {
        Self {
            primary_domain: domain.to_string(),
            alias: domain.to_lowercase(),
            website_type: WebsiteType::Deployment,
            app_type: AppType::InstalledApp,
            app_install_id,
        }
    }
}

/// Where the certificate for an HTTPS toggle comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslSource {
    /// A certificate already managed by the certificate subsystem.
    Existed,
}

/// HTTP handling once TLS is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpConfig {
    /// Redirect plain HTTP to HTTPS.
    #[serde(rename = "HTTPSOnly")]
    HttpsOnly,
}

/// Enable or disable HTTPS on a website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpsOp {
    #[serde(rename = "websiteId")]
    pub website_id: u64,
    pub enable: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source: Option<SslSource>,
    #[serde(rename = "websiteSSLId")]
    pub website_ssl_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpConfig>,
}

impl HttpsOp {
    /// Turn TLS on with an existing certificate, HTTPS only.
    #[must_use]
    pub const fn enable_existing(website_id: u64, ssl_id: u64) -> Self {
        Self {
            website_id,
            enable: true,
            source: Some(SslSource::Existed),
            website_ssl_id: ssl_id,
            http_config: Some(HttpConfig::HttpsOnly),
        }
    }

    /// Turn TLS off.
    #[must_use]
    pub const fn disable(website_id: u64) -> Self {
        Self {
            website_id,
            enable: false,
            source: None,
            website_ssl_id: 0,
            http_config: None,
        }
    }
}

/// Port for the website / reverse-proxy subsystem.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebsitePort: Send + Sync {
    /// Create a website. Lookup afterwards goes through `find_by_alias`.
    async fn create_website(&self, req: WebsiteCreate) -> Result<(), WebsiteError>;

    /// Find a website by its (lowercase) alias.
    async fn find_by_alias(&self, alias: &str) -> Result<Website, WebsiteError>;

    /// Find a website by ID.
    async fn find_by_id(&self, id: u64) -> Result<Website, WebsiteError>;

    /// Find the website bound to an installation, if any.
    async fn find_by_app_install(&self, app_install_id: u64)
    -> Result<Option<Website>, WebsiteError>;

    /// Enable or disable HTTPS.
    async fn op_https(&self, op: HttpsOp) -> Result<(), WebsiteError>;

    /// Replace the source IP allow-list. An empty list allows everyone.
    async fn apply_allow_list(&self, ips: &[String], website: &Website)
    -> Result<(), WebsiteError>;

    /// Read the current source IP allow-list.
    async fn get_allow_list(&self, website: &Website) -> Result<Vec<String>, WebsiteError>;
}
