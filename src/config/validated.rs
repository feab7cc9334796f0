//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::env::EnvConfig;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args, environment
/// and an optional TOML config, or [`ValidatedConfig::load`] to read the
/// real environment and config file.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// Time between polling cycles
    pub interval: Duration,

    /// Dry-run mode (log notifications without sending them)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL path carries the webhook token, so only the origin is shown
        write!(
            f,
            "Config {{ webhook: {}, interval: {}s, dry_run: {} }}",
            self.url.origin().ascii_serialization(),
            self.interval.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from all configuration sources.
    ///
    /// Priority: CLI > environment > TOML > built-in defaults.
    ///
    /// An invalid interval is not an error: a warning is logged and the
    /// default interval is used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook URL is missing or cannot be parsed.
    pub fn from_raw(
        cli: &Cli,
        env: &EnvConfig,
        toml: Option<&TomlConfig>,
    ) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, env, toml)?;

        let interval = Self::resolve_interval(cli, env, toml).unwrap_or_else(|e| {
            tracing::warn!(
                "{e}; using default of {} seconds",
                defaults::CHECK_INTERVAL_SECS
            );
            defaults::check_interval()
        });

        Ok(Self {
            url,
            interval,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, the process environment and
    /// the optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, &EnvConfig::from_env(), toml.as_ref())
    }

    fn resolve_url(
        cli: &Cli,
        env: &EnvConfig,
        toml: Option<&TomlConfig>,
    ) -> Result<Url, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or(env.webhook_url.as_deref())
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::URL,
                    "Set DISCORD_WEBHOOK_URL, use --url, or set webhook.url in the config file",
                )
            })?;

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    /// Picks the highest-priority interval and validates it.
    ///
    /// A bad value never falls through to a lower-priority source.
    fn resolve_interval(
        cli: &Cli,
        env: &EnvConfig,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        if let Some(ref raw) = cli.interval {
            return parse_interval("--interval", raw);
        }

        if let Some(ref raw) = env.check_interval {
            return parse_interval(defaults::CHECK_INTERVAL_ENV, raw);
        }

        match toml.and_then(|t| t.monitor.interval) {
            Some(0) => Err(ConfigError::InvalidInterval {
                origin: "monitor.interval",
                value: "0".to_string(),
            }),
            Some(secs) => Ok(Duration::from_secs(secs)),
            None => Ok(defaults::check_interval()),
        }
    }
}

/// Parses an interval given as whole seconds.
///
/// Surrounding whitespace is ignored; zero, negative and non-numeric values
/// are rejected.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidInterval`] naming `origin` if the value is
/// not a positive integer.
pub fn parse_interval(origin: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidInterval {
            origin,
            value: raw.to_string(),
        }),
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
