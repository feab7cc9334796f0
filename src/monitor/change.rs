//! Change detection between interface snapshots.

use std::fmt;
use std::net::Ipv4Addr;

use crate::network::InterfaceSnapshot;

/// Returns true if `current` should be reported.
///
/// The first snapshot (`previous` is `None`) always counts as a change.
/// Otherwise the snapshots are compared with [`InterfaceSnapshot`]'s
/// equality: interface order is ignored, address order is not.
#[must_use]
pub fn changed(previous: Option<&InterfaceSnapshot>, current: &InterfaceSnapshot) -> bool {
    previous.is_none_or(|previous| previous != current)
}

/// The kind of IP address change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpChangeKind {
    /// An address was assigned to an interface.
    Added,
    /// An address was removed from an interface.
    Removed,
}

/// A single address appearing on or disappearing from an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpChange {
    /// The interface the change occurred on.
    pub interface: String,
    /// The address that was added or removed.
    pub address: Ipv4Addr,
    /// Whether the address was added or removed.
    pub kind: IpChangeKind,
}

impl IpChange {
    /// Creates an "added" change.
    #[must_use]
    pub fn added(interface: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            interface: interface.into(),
            address,
            kind: IpChangeKind::Added,
        }
    }

    /// Creates a "removed" change.
    #[must_use]
    pub fn removed(interface: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            interface: interface.into(),
            address,
            kind: IpChangeKind::Removed,
        }
    }

    /// Returns true if this is an "added" change.
    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self.kind, IpChangeKind::Added)
    }
}

impl fmt::Display for IpChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.is_added() { "+" } else { "-" };
        write!(f, "{action} {} on {}", self.address, self.interface)
    }
}

/// Lists the addresses added and removed between two snapshots.
///
/// Used to describe a change in the logs. A pure reordering of addresses
/// within one interface is a change for [`changed`] but produces no entries
/// here.
///
/// Removals are listed before additions; each group follows the iteration
/// order of its snapshot.
#[must_use]
pub fn diff(old: &InterfaceSnapshot, new: &InterfaceSnapshot) -> Vec<IpChange> {
    let mut changes = Vec::new();

    for interface in old {
        let remaining = new.get(&interface.name).unwrap_or_default();
        for addr in &interface.addresses {
            if !remaining.contains(addr) {
                changes.push(IpChange::removed(&interface.name, *addr));
            }
        }
    }

    for interface in new {
        let before = old.get(&interface.name).unwrap_or_default();
        for addr in &interface.addresses {
            if !before.contains(addr) {
                changes.push(IpChange::added(&interface.name, *addr));
            }
        }
    }

    changes
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
