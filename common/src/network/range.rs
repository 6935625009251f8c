//! # CIDR Blocks
//!
//! Strict parsing of CIDR notation and the address arithmetic used to derive
//! well-known addresses from a block.
//!
//! Parsing only accepts the full `<address>/<prefix>` form: the address must
//! be a complete IPv4 or IPv6 literal and the prefix a decimal number no
//! larger than the family width. Host bits are allowed and ignored by the
//! arithmetic, which always starts from the masked network address.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::IpNetwork;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("missing prefix length in {0:?}")]
    MissingPrefix(String),
    #[error("invalid IP address {0:?}")]
    InvalidAddress(String),
    #[error("invalid prefix length {0:?}")]
    InvalidPrefix(String),
    #[error("prefix length {prefix} exceeds {max} bits")]
    PrefixOutOfRange { prefix: u8, max: u8 },
}

/// Parses CIDR notation like "10.96.0.0/12" or "fd00::/108".
pub fn parse_cidr(cidr: &str) -> Result<IpNetwork, CidrError> {
    let Some((addr_str, prefix_str)) = cidr.split_once('/') else {
        return Err(CidrError::MissingPrefix(cidr.to_string()));
    };

    let addr = addr_str
        .parse::<IpAddr>()
        .map_err(|_| CidrError::InvalidAddress(addr_str.to_string()))?;

    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrError::InvalidPrefix(prefix_str.to_string()));
    }
    let prefix = prefix_str
        .parse::<u8>()
        .map_err(|_| CidrError::InvalidPrefix(prefix_str.to_string()))?;

    let max: u8 = if addr.is_ipv4() { 32 } else { 128 };
    if prefix > max {
        return Err(CidrError::PrefixOutOfRange { prefix, max });
    }

    IpNetwork::new(addr, prefix).map_err(|_| CidrError::PrefixOutOfRange { prefix, max })
}

pub fn is_cidr(cidr: &str) -> bool {
    parse_cidr(cidr).is_ok()
}

/// Reports whether `addr` is a literal IPv6 address. IPv4-mapped
/// addresses (`::ffff:10.0.0.1`) count as IPv4.
pub fn is_ipv6(addr: &str) -> bool {
    addr.parse::<IpAddr>()
        .map(|ip| ip.to_canonical().is_ipv6())
        .unwrap_or(false)
}

/// Returns the address `index` positions after the network address,
/// or `None` when it falls outside of the block.
pub fn nth(network: &IpNetwork, index: u128) -> Option<IpAddr> {
    let address = match network.network() {
        IpAddr::V4(base) => {
            let index = u32::try_from(index).ok()?;
            IpAddr::V4(Ipv4Addr::from(u32::from(base).checked_add(index)?))
        }
        IpAddr::V6(base) => IpAddr::V6(Ipv6Addr::from(u128::from(base).checked_add(index)?)),
    };

    network.contains(address).then_some(address)
}

/// Adds `offset` to the last byte of `addr`, wrapping within that byte.
///
/// The result is not checked against any block; callers decide whether a
/// wrapped address is acceptable.
pub fn offset_last_octet(addr: IpAddr, offset: u8) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => {
            let mut octets = v4.octets();
            octets[3] = octets[3].wrapping_add(offset);
            IpAddr::V4(Ipv4Addr::from(octets))
        }
        IpAddr::V6(v6) => {
            let mut octets = v6.octets();
            octets[15] = octets[15].wrapping_add(offset);
            IpAddr::V6(Ipv6Addr::from(octets))
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
