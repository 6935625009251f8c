//! # kubenet core
//!
//! The configuration pipeline, in the order it runs:
//!
//! * **[`raw`]**: parses a YAML or JSON document without touching it.
//! * **[`defaults`]**: fills in the provider and kube-proxy settings.
//! * **[`validation`]**: collects every problem of the defaulted result.
//! * **[`load`]**: chains the steps above for files and strings.

pub mod defaults;
pub mod load;
pub mod raw;
pub mod validation;

pub use defaults::apply_defaults;
pub use load::{LoadError, load_and_validate, load_file, load_json, load_yaml, validated};
pub use validation::Validate;
