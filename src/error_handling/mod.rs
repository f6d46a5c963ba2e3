//! Error types and categorization.
//!
//! This module provides:
//! - Error type definitions (invalid URL, resolution failures, initialization)
//! - The two-way resolution failure classification (`FetchFailure`/`NoResults`)
//! - Transport error categorization for diagnostics

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ErrorType, InitializationError, InvalidUrl, ResolutionError, ResolutionErrorKind,
};
