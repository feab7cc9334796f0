//! Interface enumeration backed by the `if-addrs` crate.

use std::net::IpAddr;

use if_addrs::{IfAddr, get_if_addrs};

use crate::network::{AddressFetcher, FetchError, InterfaceSnapshot};

/// [`AddressFetcher`] that queries the operating system's interface table.
///
/// # Example
///
/// ```no_run
/// use ifwatch::network::{AddressFetcher, platform::SystemFetcher};
///
/// let fetcher = SystemFetcher::new();
/// let snapshot = fetcher.capture().expect("Failed to enumerate interfaces");
///
/// for interface in &snapshot {
///     println!("{}: {:?}", interface.name, interface.addresses);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemFetcher {
    _private: (),
}

impl SystemFetcher {
    /// Creates a new system interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressFetcher for SystemFetcher {
    fn capture(&self) -> Result<InterfaceSnapshot, FetchError> {
        let interfaces = get_if_addrs()?;

        let entries = interfaces.into_iter().map(|iface| {
            let ip = match iface.addr {
                IfAddr::V4(v4) => IpAddr::V4(v4.ip),
                IfAddr::V6(v6) => IpAddr::V6(v6.ip),
            };
            (iface.name, ip)
        });

        let snapshot = collect_ipv4(entries);
        tracing::trace!(
            "Captured {} interface(s) with {} IPv4 address(es)",
            snapshot.len(),
            snapshot.address_count()
        );
        Ok(snapshot)
    }
}

/// Groups OS `(interface, address)` pairs into a snapshot, keeping IPv4 only.
///
/// Interfaces that only carry IPv6 addresses never enter the snapshot.
fn collect_ipv4<I>(entries: I) -> InterfaceSnapshot
where
    I: IntoIterator<Item = (String, IpAddr)>,
{
    let mut snapshot = InterfaceSnapshot::new();
    for (name, ip) in entries {
        if let IpAddr::V4(v4) = ip {
            snapshot.push(&name, v4);
        }
    }
    snapshot
}
