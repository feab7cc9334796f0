//! Address fetching trait and error types.

use super::InterfaceSnapshot;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The OS query for interface addresses failed.
    #[error("Failed to enumerate network interfaces: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for capturing the host's interface addresses.
///
/// # Design
///
/// - Enables dependency injection for testing with mock implementations
/// - Platform-specific implementations provided in [`super::platform`]
///
/// # Example
///
/// ```ignore
/// use ifwatch::network::{AddressFetcher, FetchError, InterfaceSnapshot};
///
/// struct MockFetcher {
///     snapshots: Vec<InterfaceSnapshot>,
///     call_count: std::sync::atomic::AtomicUsize,
/// }
///
/// impl AddressFetcher for MockFetcher {
///     fn capture(&self) -> Result<InterfaceSnapshot, FetchError> {
///         let idx = self.call_count.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
///         Ok(self.snapshots.get(idx).cloned().unwrap_or_default())
///     }
/// }
/// ```
pub trait AddressFetcher: Send + Sync {
    /// Captures the current IPv4 addresses of every interface.
    ///
    /// Interfaces without an IPv4 address are omitted from the result.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the OS cannot be queried (permissions,
    /// unsupported platform, etc.).
    fn capture(&self) -> Result<InterfaceSnapshot, FetchError>;
}
