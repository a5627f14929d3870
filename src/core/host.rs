use std::net::IpAddr;

use sysinfo::{Networks, System};

use crate::error::{NetUtilsError, Result};

/// One IPv4 address bound to a network interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub interface: String,
    pub address: IpAddr,
}

/// Non-loopback IPv4 addresses of every interface, sorted by interface name.
pub fn list_addresses() -> Vec<InterfaceAddress> {
    let networks = Networks::new_with_refreshed_list();

    let mut addresses: Vec<InterfaceAddress> = networks
        .list()
        .iter()
        .flat_map(|(name, data)| {
            data.ip_networks().iter().map(move |net| InterfaceAddress {
                interface: name.clone(),
                address: net.addr,
            })
        })
        .filter(|entry| is_reportable(&entry.address))
        .collect();

    addresses.sort_by(|a, b| a.interface.cmp(&b.interface).then(a.address.cmp(&b.address)));
    log::debug!("Found {} reportable addresses", addresses.len());
    addresses
}

fn is_reportable(address: &IpAddr) -> bool {
    match address {
        IpAddr::V4(v4) => !v4.is_loopback(),
        IpAddr::V6(_) => false,
    }
}

pub fn hostname() -> Result<String> {
    System::host_name()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| NetUtilsError::host("could not determine the host name"))
}
