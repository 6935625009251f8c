//! # Loading Pipeline
//!
//! Parse, then default, then (optionally) validate. The result of
//! [`load_and_validate`] is safe to hand to the components that consume it.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use kubenet_common::field::{ErrorList, FieldError};
use kubenet_common::network::Network;
use thiserror::Error;
use tracing::debug;

use crate::defaults::apply_defaults;
use crate::raw::RawNetwork;
use crate::validation::Validate;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML network configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON network configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid network configuration: {}", summarize(.0))]
    Validation(ErrorList),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("; ")
}

pub fn load_yaml(doc: &str) -> Result<Network, LoadError> {
    RawNetwork::from_yaml(doc).map(apply_defaults)
}

pub fn load_json(doc: &str) -> Result<Network, LoadError> {
    RawNetwork::from_json(doc).map(apply_defaults)
}

/// Loads a configuration file. `.json` files are read as JSON, anything
/// else as YAML.
pub fn load_file(path: &Path) -> Result<Network, LoadError> {
    debug!("Loading network configuration from {}", path.display());
    let doc = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(OsStr::to_str) {
        Some("json") => load_json(&doc),
        _ => load_yaml(&doc),
    }
}

/// Passes `network` through only when validation finds nothing wrong.
pub fn validated(network: Network) -> Result<Network, LoadError> {
    let errors = network.validate();
    if errors.is_empty() {
        Ok(network)
    } else {
        Err(LoadError::Validation(errors))
    }
}

pub fn load_and_validate(path: &Path) -> Result<Network, LoadError> {
    validated(load_file(path)?)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
