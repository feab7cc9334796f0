//! Platform-specific interface fetcher implementations.
//!
//! This module provides the production implementation of the
//! [`AddressFetcher`](super::AddressFetcher) trait.
//!
//! # Platform Support
//!
//! - **Linux / macOS / BSD**: `getifaddrs` via the `if-addrs` crate.
//! - **Windows**: `GetAdaptersAddresses` via the `if-addrs` crate.

mod system;

pub use system::SystemFetcher;

/// The fetcher used by the binary on the current platform.
pub use system::SystemFetcher as PlatformFetcher;
