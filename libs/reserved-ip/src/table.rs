//! The process-wide table of reserved network prefixes

use ipnet::IpNet;
use std::{fmt, sync::OnceLock};

/// Shorthand for building a table entry from a CIDR literal
macro_rules! reserved {
    ($cidr:literal, $description:literal) => {
        ReservedNetwork {
            network: $cidr.parse().unwrap(),
            description: $description,
        }
    };
}

/// A single reserved network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservedNetwork {
    network: IpNet,
    description: &'static str,
}

impl ReservedNetwork {
    /// The network prefix covered by this entry
    #[must_use]
    pub fn network(&self) -> IpNet {
        self.network
    }

    /// A short human-readable name for what this range is used for
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for ReservedNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.network, self.description)
    }
}

/// Lazily built on first access and never written again
static RESERVED_NETWORKS: OnceLock<Vec<ReservedNetwork>> = OnceLock::new();

/// Returns every reserved network prefix, in table order.
///
/// IPv4 entries come first, followed by IPv6 entries. `fe80::/64` is kept next to
/// `fe80::/10` even though the latter already covers it, so lookups that report the
/// matching entry will always report `fe80::/10`.
#[must_use]
pub fn reserved_networks() -> &'static [ReservedNetwork] {
    RESERVED_NETWORKS.get_or_init(|| {
        vec![
            // IPv4
            reserved!("0.0.0.0/8", "\"this\" network"),
            reserved!("10.0.0.0/8", "private-use"),
            reserved!("100.64.0.0/10", "shared address space"),
            reserved!("127.0.0.0/8", "loopback"),
            reserved!("169.254.0.0/16", "link-local"),
            reserved!("172.16.0.0/12", "private-use"),
            reserved!("192.0.0.0/29", "IPv4 service continuity prefix"),
            reserved!("192.0.2.0/24", "documentation (TEST-NET-1)"),
            reserved!("192.88.99.0/24", "6to4 relay anycast"),
            reserved!("192.168.0.0/16", "private-use"),
            reserved!("198.18.0.0/15", "benchmarking"),
            reserved!("198.51.100.0/24", "documentation (TEST-NET-2)"),
            reserved!("203.0.113.0/24", "documentation (TEST-NET-3)"),
            reserved!("224.0.0.0/4", "multicast"),
            reserved!("240.0.0.0/4", "reserved for future use"),
            reserved!("255.255.255.255/32", "limited broadcast"),
            // IPv6
            reserved!("::/128", "unspecified address"),
            reserved!("::1/128", "loopback"),
            reserved!("64:ff9b::/96", "NAT64 well-known prefix"),
            reserved!("2001:db8::/32", "documentation"),
            reserved!("fc00::/7", "unique local"),
            reserved!("fe80::/10", "link-local unicast"),
            reserved!("fe80::/64", "link-local unicast"),
            reserved!("ff00::/8", "multicast"),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cardinality() {
        let networks = reserved_networks();
        assert_eq!(networks.len(), 24);
        assert_eq!(
            networks
                .iter()
                .filter(|entry| matches!(entry.network(), IpNet::V4(_)))
                .count(),
            16
        );
        assert_eq!(
            networks
                .iter()
                .filter(|entry| matches!(entry.network(), IpNet::V6(_)))
                .count(),
            8
        );
    }

    #[test]
    fn test_table_order() {
        let networks = reserved_networks();
        assert_eq!(networks[0].network(), "0.0.0.0/8".parse::<IpNet>().unwrap());
        assert_eq!(
            networks[15].network(),
            "255.255.255.255/32".parse::<IpNet>().unwrap()
        );
        assert_eq!(networks[16].network(), "::/128".parse::<IpNet>().unwrap());
        assert_eq!(networks[23].network(), "ff00::/8".parse::<IpNet>().unwrap());
    }

    #[test]
    fn test_literals_have_no_host_bits() {
        for entry in reserved_networks() {
            assert_eq!(entry.network(), entry.network().trunc(), "{entry}");
        }
    }

    #[test]
    fn test_link_local_redundancy_is_kept() {
        let wide: IpNet = "fe80::/10".parse().unwrap();
        let narrow: IpNet = "fe80::/64".parse().unwrap();
        let networks = reserved_networks();
        assert!(networks.iter().any(|entry| entry.network() == wide));
        assert!(networks.iter().any(|entry| entry.network() == narrow));
        assert!(wide.contains(&narrow));
    }

    #[test]
    fn test_table_is_shared() {
        let first = reserved_networks();
        let second = reserved_networks();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            reserved_networks()[1].to_string(),
            "10.0.0.0/8 (private-use)"
        );
    }
}
