//! Environment variable configuration source.

use super::defaults::{CHECK_INTERVAL_ENV, WEBHOOK_URL_ENV};

/// Values read from the process environment.
///
/// An empty webhook URL is treated as unset. An empty interval is kept so
/// validation rejects it with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// `DISCORD_WEBHOOK_URL`
    pub webhook_url: Option<String>,
    /// `CHECK_INTERVAL`, unparsed
    pub check_interval: Option<String>,
}

impl EnvConfig {
    /// Reads the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads variables through `lookup` (useful for testing).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            webhook_url: lookup(WEBHOOK_URL_ENV).filter(|value| !value.is_empty()),
            check_interval: lookup(CHECK_INTERVAL_ENV),
        }
    }
}
