//! # Defaulting
//!
//! The second step of the loading pipeline: turns a [`RawNetwork`] into a
//! canonical [`Network`].
//!
//! Only the provider and kube-proxy settings are filled in here. The address
//! ranges, cluster domain and dual-stack settings are taken as written; their
//! defaults belong to [`Network::default`] alone, so a document that leaves
//! them out is reported by validation instead of being silently completed.

use kubenet_common::network::{
    Calico, KubeProxy, KubeRouter, Network, PROVIDER_CALICO, PROVIDER_KUBE_ROUTER, Provider,
};
use kubenet_common::network::kube_proxy::MODE_IPTABLES;
use tracing::{debug, warn};

use crate::raw::{RawKubeProxy, RawNetwork};

/// Fills every gap of a parsed document. Never fails.
pub fn apply_defaults(raw: RawNetwork) -> Network {
    let RawNetwork {
        calico,
        dual_stack,
        kube_proxy,
        kube_router,
        pod_cidr,
        provider,
        service_cidr,
        cluster_domain,
    } = raw;

    Network {
        pod_cidr: pod_cidr.unwrap_or_default(),
        service_cidr: service_cidr.unwrap_or_default(),
        provider: default_provider(provider, calico, kube_router),
        cluster_domain: cluster_domain.unwrap_or_default(),
        dual_stack: dual_stack.unwrap_or_default(),
        kube_proxy: default_kube_proxy(kube_proxy),
    }
}

impl From<RawNetwork> for Network {
    fn from(raw: RawNetwork) -> Self {
        apply_defaults(raw)
    }
}

fn default_provider(
    name: Option<String>,
    calico: Option<Calico>,
    kube_router: Option<KubeRouter>,
) -> Provider {
    let name = name.unwrap_or_else(|| {
        debug!("No network provider set, using {PROVIDER_KUBE_ROUTER}");
        PROVIDER_KUBE_ROUTER.to_string()
    });

    match name.as_str() {
        PROVIDER_CALICO => {
            drop_inactive(PROVIDER_KUBE_ROUTER, kube_router.is_some(), &name);
            Provider::Calico(calico.unwrap_or_else(|| {
                debug!("No calico settings given, using defaults");
                Calico::default()
            }))
        }
        PROVIDER_KUBE_ROUTER => {
            drop_inactive(PROVIDER_CALICO, calico.is_some(), &name);
            Provider::KubeRouter(kube_router.unwrap_or_else(|| {
                debug!("No kuberouter settings given, using defaults");
                KubeRouter::default()
            }))
        }
        _ => {
            drop_inactive(PROVIDER_CALICO, calico.is_some(), &name);
            drop_inactive(PROVIDER_KUBE_ROUTER, kube_router.is_some(), &name);
            Provider::from_name(name)
        }
    }
}

fn drop_inactive(section: &str, present: bool, provider: &str) {
    if present {
        warn!("Ignoring {section} settings, the network provider is {provider:?}");
    }
}

fn default_kube_proxy(raw: Option<RawKubeProxy>) -> KubeProxy {
    let Some(raw) = raw else {
        debug!("No kubeProxy settings given, using defaults");
        return KubeProxy::default();
    };

    KubeProxy {
        disabled: raw.disabled,
        mode: raw.mode.unwrap_or_else(|| MODE_IPTABLES.to_string()),
        iptables: raw.iptables.unwrap_or_default(),
        ipvs: raw.ipvs.unwrap_or_default(),
        node_port_addresses: raw.node_port_addresses,
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
