use std::path::Path;

use anyhow::Context;
use kubenet_common::config::Config;
use kubenet_core::Validate;
use tracing::info;

use crate::terminal::print;

pub fn validate(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let network = kubenet_core::load_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let errors = network.validate();
    if errors.is_empty() {
        info!("{} is a valid network configuration", file.display());
        return Ok(());
    }

    print::header("validation errors", cfg.quiet);
    for (idx, err) in errors.iter().enumerate() {
        print::field_error(idx, err);
    }

    let unit: &str = if errors.len() == 1 { "problem" } else { "problems" };
    anyhow::bail!("{} {unit} found in {}", errors.len(), file.display());
}
