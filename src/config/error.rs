//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI, environment or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid URL provided.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Poll interval is not a positive whole number of seconds.
    ///
    /// Recovered by falling back to the default interval.
    #[error("Invalid {origin} value '{value}': expected a positive number of seconds")]
    InvalidInterval {
        /// Where the value came from (flag, variable or file key)
        origin: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The webhook URL field.
    pub const URL: &str = "url";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_names_field_and_hint() {
        let error = ConfigError::missing(field::URL, "Set DISCORD_WEBHOOK_URL");
        assert_eq!(
            error.to_string(),
            "Missing required field: url. Set DISCORD_WEBHOOK_URL"
        );
    }

    #[test]
    fn invalid_interval_names_origin_and_value() {
        let error = ConfigError::InvalidInterval {
            origin: "CHECK_INTERVAL",
            value: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid CHECK_INTERVAL value 'abc': expected a positive number of seconds"
        );
    }
}
