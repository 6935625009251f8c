//! # Derived Service Addresses
//!
//! Well-known addresses carved out of the service CIDRs:
//! * The cluster IP of the DNS add-on.
//! * The in-cluster addresses of the API server (`kubernetes.default`).

use std::net::IpAddr;

use pnet::ipnetwork::IpNetwork;
use thiserror::Error;
use tracing::debug;

use super::Network;
use super::range::{self, CidrError};

/// Blocks with a prefix at least this long are too small to reserve offset 10.
const SMALL_BLOCK_PREFIX: u8 = 29;
const DNS_OFFSET: u8 = 10;
const SMALL_BLOCK_DNS_OFFSET: u8 = 2;
const API_ADDRESS_INDEX: u128 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("failed to parse service CIDR {cidr:?}: {source}")]
    ServiceCidr {
        cidr: String,
        #[source]
        source: CidrError,
    },
    #[error("could not calculate a valid DNS address: {address} is outside of {network}")]
    DnsAddress { address: IpAddr, network: IpNetwork },
    #[error("can't build internal API address: subnet {network} is too small for index {index}")]
    ApiAddress { network: IpNetwork, index: u128 },
}

impl Network {
    /// Calculates the cluster IP reserved for the DNS service.
    ///
    /// This is the 10th address of the service CIDR, or the 2nd one for
    /// blocks of /29 and smaller.
    pub fn dns_address(&self) -> Result<String, AddressError> {
        let network = parse_service_cidr(&self.service_cidr)?;

        let offset = if network.prefix() < SMALL_BLOCK_PREFIX {
            DNS_OFFSET
        } else {
            SMALL_BLOCK_DNS_OFFSET
        };

        let address = range::offset_last_octet(network.network(), offset);
        if !network.contains(address) {
            return Err(AddressError::DnsAddress { address, network });
        }

        debug!("DNS address {address} calculated from {network}");
        Ok(address.to_string())
    }

    /// Calculates the in-cluster API server address of every service CIDR.
    ///
    /// The primary service CIDR comes first, followed by the IPv6 one when
    /// dual-stack is enabled.
    pub fn internal_api_addresses(&self) -> Result<Vec<String>, AddressError> {
        let mut cidrs: Vec<&str> = vec![self.service_cidr.as_str()];
        if self.dual_stack.enabled {
            cidrs.push(&self.dual_stack.ipv6_service_cidr);
        }

        let networks: Vec<IpNetwork> = cidrs
            .into_iter()
            .map(parse_service_cidr)
            .collect::<Result<_, _>>()?;

        networks
            .iter()
            .map(|network| {
                range::nth(network, API_ADDRESS_INDEX)
                    .map(|address| address.to_string())
                    .ok_or(AddressError::ApiAddress {
                        network: *network,
                        index: API_ADDRESS_INDEX,
                    })
            })
            .collect()
    }
}

fn parse_service_cidr(cidr: &str) -> Result<IpNetwork, AddressError> {
    range::parse_cidr(cidr).map_err(|source| AddressError::ServiceCidr {
        cidr: cidr.to_string(),
        source,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
