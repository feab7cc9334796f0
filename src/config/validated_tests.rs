//! Tests for merging and validating configuration.

use std::io::Write;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use super::*;

const URL: &str = "https://discord.com/api/webhooks/1/token";

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["ifwatch"];
    full.extend_from_slice(args);
    Cli::parse_from_iter(full)
}

fn env(url: Option<&str>, interval: Option<&str>) -> EnvConfig {
    EnvConfig {
        webhook_url: url.map(ToString::to_string),
        check_interval: interval.map(ToString::to_string),
    }
}

fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod url {
    use super::*;

    #[test]
    fn missing_url_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), &env(None, None), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "url", .. })
        ));
    }

    #[test]
    fn url_from_environment() {
        let config = ValidatedConfig::from_raw(&cli(&[]), &env(Some(URL), None), None).unwrap();

        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn url_from_toml() {
        let file = toml(&format!("[webhook]\nurl = \"{URL}\"\n"));

        let config = ValidatedConfig::from_raw(&cli(&[]), &env(None, None), Some(&file)).unwrap();

        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn cli_beats_environment_beats_toml() {
        let file = toml("[webhook]\nurl = \"https://toml.example.com/\"\n");
        let from_env = env(Some("https://env.example.com/"), None);

        let from_cli = cli(&["--url", "https://cli.example.com/"]);

        let config = ValidatedConfig::from_raw(&from_cli, &from_env, Some(&file)).unwrap();
        assert_eq!(config.url.as_str(), "https://cli.example.com/");

        let config = ValidatedConfig::from_raw(&cli(&[]), &from_env, Some(&file)).unwrap();
        assert_eq!(config.url.as_str(), "https://env.example.com/");
    }

    #[test]
    fn unparsable_url_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), &env(Some("not a url"), None), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}

mod interval {
    use super::*;

    fn resolved(cli_args: &[&str], env_interval: Option<&str>, file: Option<&str>) -> Duration {
        let file = file.map(toml);
        let from_env = env(Some(URL), env_interval);
        ValidatedConfig::from_raw(&cli(cli_args), &from_env, file.as_ref())
            .unwrap()
            .interval
    }

    #[test]
    fn defaults_to_300_seconds() {
        assert_eq!(resolved(&[], None, None), Duration::from_secs(300));
    }

    #[test]
    fn numeric_environment_value_is_used() {
        assert_eq!(resolved(&[], Some("60"), None), Duration::from_secs(60));
    }

    /// Asserts `raw` takes the warning branch and resolves to the default.
    fn assert_rejected_with_default(raw: &str) {
        assert!(matches!(
            parse_interval("CHECK_INTERVAL", raw),
            Err(ConfigError::InvalidInterval { value, .. }) if value == raw
        ));
        assert_eq!(resolved(&[], Some(raw), None), Duration::from_secs(300));
    }

    #[test]
    fn non_numeric_environment_value_falls_back_to_default() {
        assert_rejected_with_default("abc");
    }

    #[test]
    fn empty_environment_value_falls_back_to_default() {
        assert_rejected_with_default("");

        let from_lookup = EnvConfig::from_lookup(|key| match key {
            "DISCORD_WEBHOOK_URL" => Some(URL.to_string()),
            "CHECK_INTERVAL" => Some(String::new()),
            _ => None,
        });
        let config = ValidatedConfig::from_raw(&cli(&[]), &from_lookup, None).unwrap();
        assert_eq!(config.interval, Duration::from_secs(300));
    }

    #[test]
    fn zero_falls_back_to_default() {
        assert_eq!(resolved(&[], Some("0"), None), Duration::from_secs(300));
        assert_eq!(
            resolved(&[], None, Some("[monitor]\ninterval = 0\n")),
            Duration::from_secs(300)
        );
    }

    #[test]
    fn negative_falls_back_to_default() {
        assert_rejected_with_default("-5");
    }

    #[test]
    fn invalid_value_does_not_fall_through_to_lower_source() {
        let interval = resolved(&[], Some("abc"), Some("[monitor]\ninterval = 30\n"));

        assert_eq!(interval, Duration::from_secs(300));
    }

    #[test]
    fn cli_beats_environment_beats_toml() {
        let file = Some("[monitor]\ninterval = 30\n");

        assert_eq!(
            resolved(&["--interval", "10"], Some("20"), file),
            Duration::from_secs(10)
        );
        assert_eq!(resolved(&[], Some("20"), file), Duration::from_secs(20));
        assert_eq!(resolved(&[], None, file), Duration::from_secs(30));
    }

    #[test]
    fn parse_interval_reports_origin_and_value() {
        let error = parse_interval("CHECK_INTERVAL", "abc").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::InvalidInterval {
                origin: "CHECK_INTERVAL",
                ref value,
            } if value == "abc"
        ));
    }

    #[test]
    fn parse_interval_trims_whitespace() {
        assert_eq!(
            parse_interval("CHECK_INTERVAL", " 60\n").unwrap(),
            Duration::from_secs(60)
        );
    }
}

mod flags {
    use super::*;

    #[test]
    fn dry_run_and_verbose_come_from_cli() {
        let flags = cli(&["--dry-run", "--verbose"]);

        let config = ValidatedConfig::from_raw(&flags, &env(Some(URL), None), None).unwrap();

        assert!(config.dry_run);
        assert!(config.verbose);
    }

    #[test]
    fn display_hides_webhook_token() {
        let config = ValidatedConfig::from_raw(&cli(&[]), &env(Some(URL), None), None).unwrap();
        let shown = config.to_string();

        assert_eq!(
            shown,
            "Config { webhook: https://discord.com, interval: 300s, dry_run: false }"
        );
        assert!(!shown.contains("token"));
    }
}

mod loading {
    use super::*;

    #[test]
    fn config_file_values_are_used() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nurl = \"{URL}\"\n\n[monitor]\ninterval = 45").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let file_config = TomlConfig::load(file.path()).unwrap();
        let args = cli(&["-c", &path]);

        let config = ValidatedConfig::from_raw(&args, &env(None, None), Some(&file_config)).unwrap();

        assert_eq!(config.url.as_str(), URL);
        assert_eq!(config.interval, Duration::from_secs(45));
    }

    #[test]
    fn load_missing_file_returns_file_read_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let path = missing.to_str().unwrap();

        let result = ValidatedConfig::load(&cli(&["-c", path]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn write_default_config_creates_loadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ifwatch.toml");

        write_default_config(&path).unwrap();

        let config = TomlConfig::load(&path).unwrap();
        assert_eq!(config.monitor.interval, Some(300));
    }

    #[test]
    fn write_default_config_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("ifwatch.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
