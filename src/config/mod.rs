//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, user-facing messages)
//! - HTTP header and query parameter constants for DoH requests
//! - Configuration types, CLI option parsing and validation

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Cli, Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
