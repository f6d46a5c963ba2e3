//! Diagnostic logging for the analyzer.
//!
//! Logs never go to stdout, which carries the rendered tables. What gets
//! logged:
//! - `debug`: form state transitions and the outgoing DoH query
//! - `warn`: failed lookups with their transport cause, and abandoned submissions
//! - `info`: run mode (single URL or stdin session)

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

/// HTTP stack modules held to a fixed ceiling whatever `--log-level` says.
const HTTP_STACK_CEILINGS: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
];

/// Installs the stderr logger.
///
/// `level` applies to `url_analyzer` and to any target `RUST_LOG` does not
/// mention; the HTTP client's own crates stay at the ceilings above so a
/// `--log-level trace` run shows the analyzer, not connection pool chatter.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show the DoH request and state transitions
/// url_analyzer https://example.com --resolve-ip --log-level debug
///
/// # Machine-readable lines
/// url_analyzer https://example.com -r --log-format json 2> analyzer.log
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, ceiling) in HTTP_STACK_CEILINGS {
        builder.filter_module(module, (*ceiling).min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let msg = serde_json::to_string(&record.args().to_string())
                    .unwrap_or_else(|_| "\"\"".into());
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    msg
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    level_label(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn level_label(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
