//! Configuration layer for ifwatch.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Environment variables ([`EnvConfig`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **CLI arguments** - `--url`, `--interval`
//! 2. **Environment** - `DISCORD_WEBHOOK_URL`, `CHECK_INTERVAL`
//! 3. **TOML config file** - `webhook.url`, `monitor.interval`
//! 4. **Built-in defaults** - 300 second interval; the URL has no default
//!
//! # Interval Fallback
//!
//! An interval that is not a positive integer never aborts startup. The
//! highest-priority value is checked on its own; if it is invalid a warning
//! is logged and the default is used, even when a lower-priority source
//! holds a valid value.

mod cli;
pub mod defaults;
mod env;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use env::EnvConfig;
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, parse_interval, write_default_config};
