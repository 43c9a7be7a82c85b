//! Domain binding request and view types.
//!
//! A binding exposes one installed service through one reverse-proxy
//! virtual host, optionally behind TLS and an IP allow-list.

use serde::{Deserialize, Serialize};

/// Request to bind a new domain. `ssl_id == 0` means no certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindDomainRequest {
    pub domain: String,
    #[serde(rename = "appInstallID")]
    pub app_install_id: u64,
    #[serde(rename = "sslID", default)]
    pub ssl_id: u64,
    #[serde(rename = "allowIPs", default)]
    pub allow_ips: Vec<String>,
}

/// Request to change TLS and allow-list settings of an existing binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBindingRequest {
    #[serde(rename = "websiteID")]
    pub website_id: u64,
    #[serde(rename = "sslID", default)]
    pub ssl_id: u64,
    #[serde(rename = "allowIPs", default)]
    pub allow_ips: Vec<String>,
}

/// Current binding of an installation. All-zero when nothing is bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingView {
    #[serde(rename = "websiteID")]
    pub website_id: u64,
    pub domain: String,
    #[serde(rename = "sslID")]
    pub ssl_id: u64,
    #[serde(rename = "allowIPs")]
    pub allow_ips: Vec<String>,
}
