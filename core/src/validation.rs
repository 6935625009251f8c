//! # Validation
//!
//! Checks a defaulted configuration and reports every problem found, in a
//! fixed order. Validation never stops at the first error so that a user can
//! fix a document in one go.

use kubenet_common::field::{ErrorList, FieldError, FieldPath};
use kubenet_common::network::kube_proxy::SUPPORTED_MODES;
use kubenet_common::network::{KubeProxy, Network, Provider, SUPPORTED_PROVIDERS, dns, range};
use tracing::debug;

const INVALID_CIDR: &str = "invalid CIDR address";

/// Something that can check itself for configuration errors.
pub trait Validate {
    fn validate(&self) -> ErrorList;
}

/// An absent configuration has nothing wrong with it.
impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> ErrorList {
        self.as_ref().map(Validate::validate).unwrap_or_default()
    }
}

impl Validate for Network {
    fn validate(&self) -> ErrorList {
        let mut errors = ErrorList::new();

        let provider = self.provider.name();
        if provider.is_empty() {
            errors.push(FieldError::required(FieldPath::new("provider"), ""));
        } else if !SUPPORTED_PROVIDERS.contains(&provider) {
            errors.push(FieldError::not_supported(
                FieldPath::new("provider"),
                provider,
                &SUPPORTED_PROVIDERS,
            ));
        }

        check_cidr(&mut errors, FieldPath::new("podCIDR"), &self.pod_cidr);
        check_cidr(&mut errors, FieldPath::new("serviceCIDR"), &self.service_cidr);

        if !dns::is_dns_name(&self.cluster_domain) {
            errors.push(FieldError::invalid(
                FieldPath::new("clusterDomain"),
                &self.cluster_domain,
                "invalid DNS name",
            ));
        }

        if self.dual_stack.enabled {
            if let Provider::Calico(calico) = &self.provider {
                if !calico.is_bird() {
                    errors.push(FieldError::forbidden(
                        FieldPath::new("calico").child("mode"),
                        "dual stack for calico is only supported for mode `bird`",
                    ));
                }
            }

            let dual_stack = FieldPath::new("dualStack");
            check_cidr(
                &mut errors,
                dual_stack.child("IPv6podCIDR"),
                &self.dual_stack.ipv6_pod_cidr,
            );
            check_cidr(
                &mut errors,
                dual_stack.child("IPv6serviceCIDR"),
                &self.dual_stack.ipv6_service_cidr,
            );
        }

        errors.extend(self.kube_proxy.validate());

        debug!("Network configuration checked, {} problem(s) found", errors.len());
        errors
    }
}

impl Validate for KubeProxy {
    fn validate(&self) -> ErrorList {
        let mut errors = ErrorList::new();
        if self.disabled {
            return errors;
        }

        let root = FieldPath::new("kubeProxy");
        if !SUPPORTED_MODES.contains(&self.mode.as_str()) {
            errors.push(FieldError::not_supported(
                root.child("mode"),
                &self.mode,
                &SUPPORTED_MODES,
            ));
        }

        let exclude_cidrs = root.child("ipvs").child("excludeCIDRs");
        for (idx, cidr) in self.ipvs.exclude_cidrs.iter().enumerate() {
            check_cidr(&mut errors, exclude_cidrs.index(idx), cidr);
        }

        let node_port_addresses = root.child("nodePortAddresses");
        for (idx, cidr) in self.node_port_addresses.iter().enumerate() {
            check_cidr(&mut errors, node_port_addresses.index(idx), cidr);
        }

        errors
    }
}

fn check_cidr(errors: &mut ErrorList, path: FieldPath, cidr: &str) {
    if !range::is_cidr(cidr) {
        errors.push(FieldError::invalid(path, cidr, INVALID_CIDR));
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
