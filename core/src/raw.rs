//! # Raw Network Documents
//!
//! The parse step of the loading pipeline. A [`RawNetwork`] mirrors a
//! network configuration document as written: every field is optional and
//! nothing is defaulted, so the defaulting pass can tell "absent" apart
//! from "empty".

use kubenet_common::network::{
    Calico, DualStack, KubeProxyIPTables, KubeProxyIPVS, KubeRouter,
};
use serde::Deserialize;

use crate::load::LoadError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNetwork {
    pub calico: Option<Calico>,
    pub dual_stack: Option<DualStack>,
    pub kube_proxy: Option<RawKubeProxy>,
    #[serde(rename = "kuberouter")]
    pub kube_router: Option<KubeRouter>,
    #[serde(rename = "podCIDR")]
    pub pod_cidr: Option<String>,
    pub provider: Option<String>,
    #[serde(rename = "serviceCIDR")]
    pub service_cidr: Option<String>,
    pub cluster_domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawKubeProxy {
    #[serde(default)]
    pub disabled: bool,
    pub mode: Option<String>,
    pub iptables: Option<KubeProxyIPTables>,
    pub ipvs: Option<KubeProxyIPVS>,
    #[serde(default)]
    pub node_port_addresses: Vec<String>,
}

impl RawNetwork {
    /// Parses a YAML document. An empty document yields an empty configuration.
    pub fn from_yaml(doc: &str) -> Result<Self, LoadError> {
        if doc.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(doc)?)
    }

    pub fn from_json(doc: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(doc)?)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
