//! DNS-over-HTTPS resolution.
//!
//! This module provides the async IPv4 lookup used by the form controller:
//! - The `IpResolver` seam and its DoH implementation (`reqwest`)
//! - Parsing of the JSON answer format (`serde_json`)
//!
//! Each lookup is a single attempt. There is no retry and no caching.

mod resolver;
mod response;

// Re-export public API
pub use resolver::{DohResolver, IpResolver};
pub use response::{parse_answer, DohAnswer, DohResponse};
