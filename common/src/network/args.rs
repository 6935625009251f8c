//! Command line values for the pod and service CIDR flags of cluster components.

use super::Network;
use super::range;

impl Network {
    /// Builds the `--service-cluster-ip-range` value for the API server.
    ///
    /// In dual-stack mode Kubernetes treats the first CIDR as the primary
    /// family, which has to match the family of the API server's bind
    /// address `addr`.
    pub fn build_service_cidr(&self, addr: &str) -> String {
        if !self.dual_stack.enabled {
            return self.service_cidr.clone();
        }

        if range::is_ipv6(addr) {
            format!("{},{}", self.dual_stack.ipv6_service_cidr, self.service_cidr)
        } else {
            format!("{},{}", self.service_cidr, self.dual_stack.ipv6_service_cidr)
        }
    }

    /// Builds the cluster CIDR value handed to the network provider.
    ///
    /// The IPv6 range always comes first in dual-stack mode.
    pub fn build_pod_cidr(&self) -> String {
        if self.dual_stack.enabled {
            format!("{},{}", self.dual_stack.ipv6_pod_cidr, self.pod_cidr)
        } else {
            self.pod_cidr.clone()
        }
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
