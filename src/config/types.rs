//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DEFAULT_DOH_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Markup target for the results table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned terminal table, failed resolution shown in red
    Text,
    /// HTML `<table>` fragment
    Html,
    /// JSON object with the table rows
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use url_analyzer::Config;
///
/// let config = Config {
///     resolve_ip: true,
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL to analyze once; `None` starts an interactive session on stdin
    pub url: Option<String>,

    /// Resolve the hostname to IPv4 addresses (the "resolve IP" checkbox)
    pub resolve_ip: bool,

    /// Markup target for the results table
    pub format: OutputFormat,

    /// DNS-over-HTTPS JSON endpoint
    pub doh_endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            resolve_ip: false,
            format: OutputFormat::Text,
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected
    pub message: String,
}

impl Config {
    /// Checks option values before any resource is initialized.
    ///
    /// # Errors
    ///
    /// Returns the first offending field: a zero `timeout_seconds`, an empty
    /// `user_agent`, or a `doh_endpoint` that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }

        match url::Url::parse(&self.doh_endpoint) {
            Ok(endpoint) if matches!(endpoint.scheme(), "http" | "https") => Ok(()),
            Ok(endpoint) => Err(ConfigValidationError {
                field: "doh_endpoint",
                message: format!(
                    "scheme '{}' is not supported (expected http:// or https://)",
                    endpoint.scheme()
                ),
            }),
            Err(e) => Err(ConfigValidationError {
                field: "doh_endpoint",
                message: format!("not an absolute URL ({e}), e.g. {DEFAULT_DOH_ENDPOINT}"),
            }),
        }
    }
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "url_analyzer",
    version,
    about = "Decompose a URL and optionally resolve its hostname over DNS-over-HTTPS"
)]
pub struct Cli {
    /// URL to analyze. Omit to enter URLs interactively, one per line.
    pub url: Option<String>,

    /// Resolve the hostname to IPv4 addresses
    #[arg(long, short = 'r')]
    pub resolve_ip: bool,

    /// Output format of the results table
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, default_value = DEFAULT_DOH_ENDPOINT)]
    pub doh_endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            resolve_ip: cli.resolve_ip,
            format: cli.format,
            doh_endpoint: cli.doh_endpoint,
            timeout_seconds: cli.timeout_seconds,
            user_agent: cli.user_agent,
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }
}
