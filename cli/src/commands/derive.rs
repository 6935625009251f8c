use std::path::Path;

use anyhow::Context;
use kubenet_common::config::Config;
use tracing::warn;

use crate::terminal::print;

pub fn derive(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let network = kubenet_core::load_and_validate(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    if network.dual_stack.enabled && cfg.bind_address.parse::<std::net::IpAddr>().is_err() {
        warn!(
            "Bind address {:?} is not an IP address, ordering service CIDRs IPv4 first",
            cfg.bind_address
        );
    }

    let dns_address: String = network.dns_address()?;
    let api_addresses: Vec<String> = network.internal_api_addresses()?;

    print::header("derived values", cfg.quiet);
    let lines: [(&str, String); 5] = [
        ("Provider", network.provider.name().to_string()),
        ("DNS address", dns_address),
        ("API addresses", api_addresses.join(",")),
        ("Service CIDR", network.build_service_cidr(&cfg.bind_address)),
        ("Pod CIDR", network.build_pod_cidr()),
    ];
    print::aligned_lines(&lines);
    Ok(())
}
