//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client
//! - DNS-over-HTTPS resolver
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

use crate::config::Config;
use crate::dns::DohResolver;
use crate::error_handling::InitializationError;

/// Builds the DoH resolver described by `config`.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be
/// created, or `InitializationError::EndpointError` if the endpoint does not parse.
pub fn init_resolver(config: &Config) -> Result<DohResolver, InitializationError> {
    let client = init_client(config)?;
    DohResolver::with_endpoint(client, &config.doh_endpoint)
}
