//! Error type definitions.
//!
//! This module defines the error types surfaced by URL decomposition, DNS
//! resolution and application initialization.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{IP_RESOLUTION_FETCH_ERROR, IP_RESOLUTION_NO_RESULTS_ERROR};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured DoH endpoint is not a usable URL.
    #[error("DoH endpoint error: {0}")]
    EndpointError(String),
}

/// The raw input is not a syntactically valid absolute URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid URL '{input}': {reason}")]
pub struct InvalidUrl {
    /// The rejected input, as submitted
    pub input: String,
    /// Parser diagnostic
    pub reason: url::ParseError,
}

/// Classification of a failed IP resolution.
///
/// Every resolution failure is exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ResolutionErrorKind {
    /// The DoH request could not complete (connection error, timeout).
    FetchFailure,
    /// A response arrived but carried no usable IPv4 answer.
    NoResults,
}

impl ResolutionErrorKind {
    /// Short identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionErrorKind::FetchFailure => "fetch-failure",
            ResolutionErrorKind::NoResults => "no-results",
        }
    }

    /// Fixed human-readable message shown in place of the IP addresses.
    pub fn message(&self) -> &'static str {
        match self {
            ResolutionErrorKind::FetchFailure => IP_RESOLUTION_FETCH_ERROR,
            ResolutionErrorKind::NoResults => IP_RESOLUTION_NO_RESULTS_ERROR,
        }
    }
}

impl std::fmt::Display for ResolutionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified IP resolution failure carrying its display message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResolutionError {
    kind: ResolutionErrorKind,
    message: &'static str,
}

impl ResolutionError {
    /// Creates an error of `kind` with its canonical message.
    pub fn new(kind: ResolutionErrorKind) -> Self {
        Self {
            kind,
            message: kind.message(),
        }
    }

    /// The request could not be completed.
    pub fn fetch_failure() -> Self {
        Self::new(ResolutionErrorKind::FetchFailure)
    }

    /// The response yielded no IPv4 addresses.
    pub fn no_results() -> Self {
        Self::new(ResolutionErrorKind::NoResults)
    }

    /// Failure classification.
    pub fn kind(&self) -> ResolutionErrorKind {
        self.kind
    }

    /// The message rendered in the IP Address row.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl From<ResolutionErrorKind> for ResolutionError {
    fn from(kind: ResolutionErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Transport-level cause of a failed DoH request.
///
/// Only used for diagnostics; callers see [`ResolutionErrorKind::FetchFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The request could not be built
    HttpRequestBuilderError,
    /// Redirect policy violated
    HttpRequestRedirectError,
    /// Client timeout elapsed
    HttpRequestTimeoutError,
    /// Request failed while being sent
    HttpRequestRequestError,
    /// No connection to the endpoint
    HttpRequestConnectError,
    /// Body could not be read
    HttpRequestBodyError,
    /// Body could not be decoded
    HttpRequestDecodeError,
    /// Anything else
    HttpRequestOtherError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}
