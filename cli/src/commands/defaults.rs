use anyhow::Context;
use kubenet_common::network::Network;

use crate::terminal::print;

pub fn defaults() -> anyhow::Result<()> {
    let yaml: String = serde_yaml::to_string(&Network::default())
        .context("Failed to serialize the default network configuration")?;
    print::print(yaml.trim_end());
    Ok(())
}
