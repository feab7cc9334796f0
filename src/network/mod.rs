//! Network layer for capturing interface address snapshots.
//!
//! This module provides types and traits for:
//! - Representing the host's IPv4 assignments ([`InterfaceSnapshot`])
//! - Capturing snapshots ([`AddressFetcher`])
//! - The production implementation ([`platform`])
//! - Resolving the host name used in notifications ([`hostname`])

mod fetcher;
pub mod platform;
mod snapshot;

pub use fetcher::{AddressFetcher, FetchError};
pub use snapshot::{InterfaceAddresses, InterfaceSnapshot};

/// Host name used when the OS does not report one.
pub const UNKNOWN_HOST: &str = "unknown";

/// Returns the host's name, or [`UNKNOWN_HOST`] if it cannot be determined.
#[must_use]
pub fn hostname() -> String {
    sysinfo::System::host_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_is_never_empty() {
        assert!(!hostname().is_empty());
    }
}
