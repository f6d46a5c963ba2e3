//! Tests for command-line parsing.

use clap::Parser;
use url_analyzer::config::{DEFAULT_DOH_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use url_analyzer::{Cli, Config, LogFormat, LogLevel, OutputFormat};

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["url_analyzer"]).expect("Should parse without arguments");
    assert!(cli.url.is_none());
    assert!(!cli.resolve_ip);
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.doh_endpoint, DEFAULT_DOH_ENDPOINT);
    assert_eq!(cli.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    assert!(matches!(cli.log_format, LogFormat::Plain));
    assert_eq!(
        log::LevelFilter::from(cli.log_level),
        log::LevelFilter::from(LogLevel::Warn)
    );
}

#[test]
fn test_cli_single_url_with_resolution() {
    let cli = Cli::try_parse_from(["url_analyzer", "https://example.com", "-r"])
        .expect("Should parse URL and short flag");
    assert_eq!(cli.url.as_deref(), Some("https://example.com"));
    assert!(cli.resolve_ip);
}

#[test]
fn test_cli_all_options() {
    let cli = Cli::try_parse_from([
        "url_analyzer",
        "http://127.0.0.1:8080/",
        "--resolve-ip",
        "--format",
        "json",
        "--doh-endpoint",
        "https://dns.google/resolve",
        "--timeout-seconds",
        "3",
        "--user-agent",
        "probe/2",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse all options");

    let config = Config::from(cli);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.doh_endpoint, "https://dns.google/resolve");
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.user_agent, "probe/2");
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_rejects_unknown_format() {
    let result = Cli::try_parse_from(["url_analyzer", "--format", "xml"]);
    assert!(result.is_err(), "Unknown output format should be rejected");
}

#[test]
fn test_cli_rejects_non_numeric_timeout() {
    let result = Cli::try_parse_from(["url_analyzer", "--timeout-seconds", "soon"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_timeout_fails_validation() {
    let cli = Cli::try_parse_from(["url_analyzer", "--timeout-seconds", "0"])
        .expect("clap accepts zero");
    let err = Config::from(cli).validate().unwrap_err();
    assert_eq!(err.field, "timeout_seconds");
}
