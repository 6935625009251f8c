//! Calico network provider settings.

use serde::{Deserialize, Serialize};

/// The only Calico mode that supports dual-stack clusters.
pub const MODE_BIRD: &str = "bird";
pub const MODE_VXLAN: &str = "vxlan";

const DEFAULT_FLEX_VOLUME_DRIVER_PATH: &str =
    "/usr/libexec/k0s/kubelet-plugins/volume/exec/nodeagent~uds";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Calico {
    /// Networking mode: `vxlan`, `ipip` or `bird`.
    pub mode: String,
    /// Overlay policy (`Always`, `CrossSubnet` or `Never`).
    pub overlay: String,
    pub vxlan_port: u16,
    #[serde(rename = "vxlanVNI")]
    pub vxlan_vni: u32,
    /// MTU of the pod interfaces; 0 lets Calico detect it.
    pub mtu: u32,
    #[serde(rename = "wireguard")]
    pub enable_wireguard: bool,
    pub flex_volume_driver_path: String,
    #[serde(rename = "ipAutodetectionMethod")]
    pub ip_autodetection_method: String,
    #[serde(rename = "ipV6AutodetectionMethod")]
    pub ipv6_autodetection_method: String,
}

impl Default for Calico {
    fn default() -> Self {
        Self {
            mode: MODE_VXLAN.to_string(),
            overlay: "Always".to_string(),
            vxlan_port: 4789,
            vxlan_vni: 4096,
            mtu: 0,
            enable_wireguard: false,
            flex_volume_driver_path: DEFAULT_FLEX_VOLUME_DRIVER_PATH.to_string(),
            ip_autodetection_method: String::new(),
            ipv6_autodetection_method: String::new(),
        }
    }
}

impl Calico {
    pub fn is_bird(&self) -> bool {
        self.mode == MODE_BIRD
    }
}
