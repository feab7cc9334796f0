//! Core network types for interface snapshots.

use std::net::Ipv4Addr;

/// The IPv4 addresses assigned to a single interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddresses {
    /// The interface name as reported by the OS (e.g., "eth0", "wlan0").
    pub name: String,
    /// IPv4 addresses in the order the OS reported them. Never empty.
    pub addresses: Vec<Ipv4Addr>,
}

impl InterfaceAddresses {
    /// Returns the addresses rendered one per line.
    #[must_use]
    pub fn joined(&self) -> String {
        self.addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The IPv4 addresses of every interface on the host at a point in time.
///
/// # Equality
///
/// Two snapshots are equal if they contain the same set of interface names
/// and each interface has the same address list. Interface order does not
/// matter; address order within an interface does.
///
/// # Invariant
///
/// A snapshot never holds an interface with an empty address list.
#[derive(Debug, Clone, Default)]
pub struct InterfaceSnapshot {
    interfaces: Vec<InterfaceAddresses>,
}

impl InterfaceSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interfaces: Vec::new(),
        }
    }

    /// Sets the address list for an interface.
    ///
    /// An empty list removes the interface. Replacing an existing interface
    /// keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, addresses: Vec<Ipv4Addr>) {
        let name = name.into();
        let position = self.interfaces.iter().position(|i| i.name == name);

        match (position, addresses.is_empty()) {
            (Some(idx), true) => {
                self.interfaces.remove(idx);
            }
            (Some(idx), false) => self.interfaces[idx].addresses = addresses,
            (None, true) => {}
            (None, false) => self.interfaces.push(InterfaceAddresses { name, addresses }),
        }
    }

    /// Appends a single address to an interface, creating it if needed.
    pub fn push(&mut self, name: &str, address: Ipv4Addr) {
        if let Some(existing) = self.interfaces.iter_mut().find(|i| i.name == name) {
            existing.addresses.push(address);
        } else {
            self.interfaces.push(InterfaceAddresses {
                name: name.to_string(),
                addresses: vec![address],
            });
        }
    }

    /// Returns the addresses of the named interface, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Ipv4Addr]> {
        self.interfaces
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.addresses.as_slice())
    }

    /// Iterates over interfaces in the order they were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = &InterfaceAddresses> {
        self.interfaces.iter()
    }

    /// Returns the number of interfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    /// Returns true if no interface has an IPv4 address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Returns the total number of addresses across all interfaces.
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.addresses.len()).sum()
    }
}

impl PartialEq for InterfaceSnapshot {
    fn eq(&self, other: &Self) -> bool {
        // Names are unique, so equal length plus one-way containment is enough
        self.len() == other.len()
            && self
                .interfaces
                .iter()
                .all(|i| other.get(&i.name) == Some(i.addresses.as_slice()))
    }
}

impl Eq for InterfaceSnapshot {}

impl<N: Into<String>> FromIterator<(N, Vec<Ipv4Addr>)> for InterfaceSnapshot {
    fn from_iter<T: IntoIterator<Item = (N, Vec<Ipv4Addr>)>>(iter: T) -> Self {
        let mut snapshot = Self::new();
        for (name, addresses) in iter {
            snapshot.insert(name, addresses);
        }
        snapshot
    }
}

impl<'a> IntoIterator for &'a InterfaceSnapshot {
    type Item = &'a InterfaceAddresses;
    type IntoIter = std::slice::Iter<'a, InterfaceAddresses>;

    fn into_iter(self) -> Self::IntoIter {
        self.interfaces.iter()
    }
}
