//! # Network Configuration Model
//!
//! The canonical, fully defaulted network configuration of a cluster.
//!
//! A [`Network`] describes:
//! * The pod and service address ranges (CIDRs).
//! * An optional second, IPv6 pair of ranges for dual-stack clusters.
//! * The cluster DNS domain.
//! * The network provider, together with the settings of that provider only.
//! * The kube-proxy settings.
//!
//! Values of this type are produced by the loading pipeline in `kubenet-core`
//! or by [`Network::default`], and are read-only afterwards.

pub mod addresses;
pub mod args;
pub mod calico;
pub mod dns;
pub mod kube_proxy;
pub mod kube_router;
pub mod range;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub use calico::Calico;
pub use kube_proxy::{KubeProxy, KubeProxyIPTables, KubeProxyIPVS};
pub use kube_router::KubeRouter;

pub const DEFAULT_POD_CIDR: &str = "10.244.0.0/16";
pub const DEFAULT_SERVICE_CIDR: &str = "10.96.0.0/12";
pub const DEFAULT_CLUSTER_DOMAIN: &str = "cluster.local";

pub const PROVIDER_CALICO: &str = "calico";
pub const PROVIDER_KUBE_ROUTER: &str = "kuberouter";
pub const PROVIDER_CUSTOM: &str = "custom";

/// Provider names accepted in a configuration document.
pub const SUPPORTED_PROVIDERS: [&str; 3] = [PROVIDER_KUBE_ROUTER, PROVIDER_CALICO, PROVIDER_CUSTOM];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(rename = "podCIDR")]
    pub pod_cidr: String,
    #[serde(rename = "serviceCIDR")]
    pub service_cidr: String,
    #[serde(flatten)]
    pub provider: Provider,
    pub cluster_domain: String,
    pub dual_stack: DualStack,
    pub kube_proxy: KubeProxy,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            pod_cidr: DEFAULT_POD_CIDR.to_string(),
            service_cidr: DEFAULT_SERVICE_CIDR.to_string(),
            provider: Provider::default(),
            cluster_domain: DEFAULT_CLUSTER_DOMAIN.to_string(),
            dual_stack: DualStack::default(),
            kube_proxy: KubeProxy::default(),
        }
    }
}

/// Secondary IPv6 ranges for dual-stack clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualStack {
    pub enabled: bool,
    #[serde(rename = "IPv6podCIDR")]
    pub ipv6_pod_cidr: String,
    #[serde(rename = "IPv6serviceCIDR")]
    pub ipv6_service_cidr: String,
}

/// The network provider together with its settings.
///
/// Only the active provider carries settings, so a configuration can never
/// hold Calico and KubeRouter settings at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    Calico(Calico),
    KubeRouter(KubeRouter),
    /// Networking is managed outside of the cluster bootstrap.
    Custom,
    /// A provider name that is not recognised, possibly empty.
    Other(UnknownProvider),
}

/// A provider name outside of [`SUPPORTED_PROVIDERS`]. Only built through
/// [`Provider::from_name`], so it never holds a supported name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProvider(String);

impl UnknownProvider {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::KubeRouter(KubeRouter::default())
    }
}

impl Provider {
    /// Maps a provider name to its variant. Known providers get default settings.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name: String = name.into();
        match name.as_str() {
            PROVIDER_CALICO => Provider::Calico(Calico::default()),
            PROVIDER_KUBE_ROUTER => Provider::KubeRouter(KubeRouter::default()),
            PROVIDER_CUSTOM => Provider::Custom,
            _ => Provider::Other(UnknownProvider(name)),
        }
    }

    /// The name used for this provider in configuration documents.
    pub fn name(&self) -> &str {
        match self {
            Provider::Calico(_) => PROVIDER_CALICO,
            Provider::KubeRouter(_) => PROVIDER_KUBE_ROUTER,
            Provider::Custom => PROVIDER_CUSTOM,
            Provider::Other(name) => name.as_str(),
        }
    }

    pub fn calico(&self) -> Option<&Calico> {
        match self {
            Provider::Calico(calico) => Some(calico),
            _ => None,
        }
    }

    pub fn kube_router(&self) -> Option<&KubeRouter> {
        match self {
            Provider::KubeRouter(kube_router) => Some(kube_router),
            _ => None,
        }
    }
}

impl Serialize for Provider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("provider", self.name())?;
        match self {
            Provider::Calico(calico) => map.serialize_entry("calico", calico)?,
            Provider::KubeRouter(kube_router) => map.serialize_entry("kuberouter", kube_router)?,
            Provider::Custom | Provider::Other(_) => {}
        }
        map.end()
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
