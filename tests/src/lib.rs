//! Shared fixtures for the integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const SINGLE_STACK_YAML: &str = r#"
provider: kuberouter
podCIDR: 10.244.0.0/16
serviceCIDR: 10.96.0.0/12
clusterDomain: cluster.local
"#;

pub const DUAL_STACK_CALICO_YAML: &str = r#"
provider: calico
podCIDR: 10.244.0.0/16
serviceCIDR: 10.96.0.0/12
clusterDomain: cluster.local
dualStack:
  enabled: true
  IPv6podCIDR: fd00::/108
  IPv6serviceCIDR: fd01::/108
calico:
  mode: bird
"#;

pub const DUAL_STACK_CALICO_JSON: &str = r#"{
  "provider": "calico",
  "podCIDR": "10.244.0.0/16",
  "serviceCIDR": "10.96.0.0/12",
  "clusterDomain": "cluster.local",
  "dualStack": {
    "enabled": true,
    "IPv6podCIDR": "fd00::/108",
    "IPv6serviceCIDR": "fd01::/108"
  },
  "calico": { "mode": "bird" }
}"#;

/// A fixture file inside its own temporary directory. Both are removed
/// when the fixture is dropped.
pub struct TempFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl TempFixture {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes `contents` to `name` inside a fresh temporary directory.
pub fn write_temp(name: &str, contents: &str) -> TempFixture {
    let dir: TempDir = tempfile::Builder::new()
        .prefix("kubenet-tests-")
        .tempdir()
        .unwrap();
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    TempFixture { _dir: dir, path }
}
