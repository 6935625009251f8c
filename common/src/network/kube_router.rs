//! KubeRouter network provider settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeRouter {
    /// Detect the MTU from the node's primary interface.
    #[serde(rename = "autoMTU")]
    pub auto_mtu: bool,
    /// Fixed MTU, only used when `auto_mtu` is off.
    pub mtu: u32,
    pub metrics_port: u16,
    /// Hairpin mode: `Enabled`, `Allowed` or `Disabled`.
    pub hairpin: String,
    pub ip_masq: bool,
    /// Comma separated list of BGP peer addresses.
    #[serde(rename = "peerRouterIPs")]
    pub peer_router_ips: String,
    /// Comma separated list of BGP peer ASNs, matching `peer_router_ips`.
    #[serde(rename = "peerRouterASNs")]
    pub peer_router_asns: String,
}

impl Default for KubeRouter {
    fn default() -> Self {
        Self {
            auto_mtu: true,
            mtu: 0,
            metrics_port: 8080,
            hairpin: "Enabled".to_string(),
            ip_masq: false,
            peer_router_ips: String::new(),
            peer_router_asns: String::new(),
        }
    }
}
