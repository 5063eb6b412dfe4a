use std::{
    fmt,
    net::{IpAddr, Ipv4Addr},
};

use crate::{
    error::{Error, Result},
    table::{reserved_networks, ReservedNetwork},
};

/// Why an address was considered reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The address falls inside an entry of the reserved network table
    Network(&'static ReservedNetwork),
    /// An IPv4 address whose dotted-quad form ends in `0` or `255`
    SubnetOrBroadcast,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(entry) => fmt::Display::fmt(entry, f),
            Self::SubnetOrBroadcast => write!(f, "subnet or broadcast address"),
        }
    }
}

/// The outcome of classifying a single address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The address is reserved, for the given reason
    Reserved(Reason),
    /// The address is a public, globally routable host address
    Public,
}

impl Classification {
    /// Returns `true` for [`Classification::Reserved`]
    ///
    /// ```
    /// use reserved_ip::classify_text;
    ///
    /// assert!(classify_text("127.0.0.2").unwrap().is_reserved());
    /// assert!(!classify_text("8.8.8.8").unwrap().is_reserved());
    /// ```
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved(_))
    }

    /// Returns the reason, if this address is reserved
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Self::Reserved(reason) => Some(*reason),
            Self::Public => None,
        }
    }
}

/// Classifies an address against the reserved network table and the IPv4 subnet/broadcast check.
///
/// If several table entries contain the address, the first one in table order is reported.
#[must_use]
#[profiling::function]
pub fn classify(address: IpAddr) -> Classification {
    // Any matching table entry is enough. IPv4 entries never contain IPv6 addresses and vice versa
    if let Some(entry) = reserved_networks()
        .iter()
        .find(|entry| entry.network().contains(&address))
    {
        log::trace!("{} is inside reserved network {}", address, entry);
        return Classification::Reserved(Reason::Network(entry));
    }

    // IPv4-mapped IPv6 addresses are deliberately not unwrapped here
    match address {
        IpAddr::V4(ipv4_addr) if is_subnet_or_broadcast(ipv4_addr) => {
            log::trace!("{} looks like a subnet or broadcast address", address);
            Classification::Reserved(Reason::SubnetOrBroadcast)
        }
        _ => Classification::Public,
    }
}

/// Parses `ip` as an IPv4 or IPv6 address and classifies it
pub fn classify_text(ip: &str) -> Result<Classification> {
    parse_address(ip).map(classify)
}

/// Checks if an address is reserved (i.e. not a public, globally routable host address)
#[must_use]
pub fn is_reserved<T: Into<IpAddr>>(address: T) -> bool {
    classify(address.into()).is_reserved()
}

/// Checks if a textual IPv4 or IPv6 address is reserved.
///
/// Fails with [`Error::InvalidArgument`] if `ip` is empty or is not an IP address literal.
pub fn is_reserved_text(ip: &str) -> Result<bool> {
    classify_text(ip).map(|classification| classification.is_reserved())
}

/// Parse an address, auto-detecting the family from its syntax
fn parse_address(ip: &str) -> Result<IpAddr> {
    let invalid = || Error::InvalidArgument {
        parameter: "ip",
        value: ip.to_owned(),
    };

    if ip.is_empty() {
        return Err(invalid());
    }
    ip.parse().map_err(|_| invalid())
}

/// Treats any address whose canonical text ends in `0` or `255` as a subnet or broadcast address.
///
/// This works on the rendered text, so every final octet ending in the digit zero
/// (`.10`, `.20`, ... `.250`) is caught, not only `.0`.
fn is_subnet_or_broadcast(address: Ipv4Addr) -> bool {
    let text = address.to_string();
    text.ends_with('0') || text.ends_with("255")
}
