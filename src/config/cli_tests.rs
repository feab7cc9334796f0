//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["ifwatch"]);

        assert!(cli.command.is_none());
        assert!(cli.url.is_none());
        assert!(cli.interval.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_url_and_interval() {
        let cli = Cli::parse_from_iter([
            "ifwatch",
            "--url",
            "https://discord.com/api/webhooks/1/token",
            "--interval",
            "60",
        ]);

        assert_eq!(
            cli.url.as_deref(),
            Some("https://discord.com/api/webhooks/1/token")
        );
        assert_eq!(cli.interval.as_deref(), Some("60"));
    }

    #[test]
    fn interval_is_kept_unparsed() {
        let cli = Cli::parse_from_iter(["ifwatch", "--interval", "abc"]);

        assert_eq!(cli.interval.as_deref(), Some("abc"));
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from_iter(["ifwatch", "--dry-run", "-v", "-c", "/etc/ifwatch.toml"]);

        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("/etc/ifwatch.toml"))
        );
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["ifwatch", "init"]);

        assert!(cli.is_init());
        let Some(Command::Init { output }) = cli.command else {
            panic!("Expected init command");
        };
        assert_eq!(output, std::path::PathBuf::from("ifwatch.toml"));
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["ifwatch", "init", "-o", "custom.toml"]);

        let Some(Command::Init { output }) = cli.command else {
            panic!("Expected init command");
        };
        assert_eq!(output, std::path::PathBuf::from("custom.toml"));
    }

    #[test]
    fn run_mode_is_not_init() {
        let cli = Cli::parse_from_iter(["ifwatch", "--url", "https://example.com"]);

        assert!(!cli.is_init());
    }
}
