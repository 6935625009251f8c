//! kube-proxy settings.
//!
//! Durations are kept in the Go duration notation (`30s`, `1m0s`) that
//! kube-proxy itself expects on its command line.

use serde::{Deserialize, Serialize};

pub const MODE_IPTABLES: &str = "iptables";
pub const MODE_IPVS: &str = "ipvs";
pub const MODE_USERSPACE: &str = "userspace";

/// Proxy modes kube-proxy can be started with.
pub const SUPPORTED_MODES: [&str; 3] = [MODE_IPTABLES, MODE_IPVS, MODE_USERSPACE];

const ZERO_DURATION: &str = "0s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeProxy {
    /// Skip deploying kube-proxy entirely.
    pub disabled: bool,
    pub mode: String,
    pub iptables: KubeProxyIPTables,
    pub ipvs: KubeProxyIPVS,
    /// Addresses NodePort services accept connections on; empty means all.
    pub node_port_addresses: Vec<String>,
}

impl Default for KubeProxy {
    fn default() -> Self {
        Self {
            disabled: false,
            mode: MODE_IPTABLES.to_string(),
            iptables: KubeProxyIPTables::default(),
            ipvs: KubeProxyIPVS::default(),
            node_port_addresses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeProxyIPTables {
    pub masquerade_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masquerade_bit: Option<i32>,
    pub min_sync_period: String,
    pub sync_period: String,
}

impl Default for KubeProxyIPTables {
    fn default() -> Self {
        Self {
            masquerade_all: false,
            masquerade_bit: None,
            min_sync_period: ZERO_DURATION.to_string(),
            sync_period: ZERO_DURATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeProxyIPVS {
    #[serde(rename = "excludeCIDRs")]
    pub exclude_cidrs: Vec<String>,
    pub min_sync_period: String,
    pub scheduler: String,
    #[serde(rename = "strictARP")]
    pub strict_arp: bool,
    pub sync_period: String,
    pub tcp_fin_timeout: String,
    pub tcp_timeout: String,
    pub udp_timeout: String,
}

impl Default for KubeProxyIPVS {
    fn default() -> Self {
        Self {
            exclude_cidrs: Vec::new(),
            min_sync_period: ZERO_DURATION.to_string(),
            scheduler: String::new(),
            strict_arp: false,
            sync_period: ZERO_DURATION.to_string(),
            tcp_fin_timeout: ZERO_DURATION.to_string(),
            tcp_timeout: ZERO_DURATION.to_string(),
            udp_timeout: ZERO_DURATION.to_string(),
        }
    }
}
