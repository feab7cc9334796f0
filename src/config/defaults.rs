//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Environment variable holding the poll interval in seconds.
pub const CHECK_INTERVAL_ENV: &str = "CHECK_INTERVAL";

/// Default polling interval in seconds.
pub const CHECK_INTERVAL_SECS: u64 = 300;

/// Default output path for `ifwatch init`.
pub const CONFIG_FILE: &str = "ifwatch.toml";

/// Default polling interval as Duration.
#[must_use]
pub const fn check_interval() -> Duration {
    Duration::from_secs(CHECK_INTERVAL_SECS)
}
