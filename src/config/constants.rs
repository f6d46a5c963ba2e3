//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! DNS-over-HTTPS endpoint, request defaults and the fixed user-facing messages.

/// Default DNS-over-HTTPS endpoint (Cloudflare JSON API).
pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// DNS record type requested from the DoH endpoint. Only A records are resolved.
pub const DOH_RECORD_TYPE: &str = "A";

/// Per-request timeout in seconds for the DoH lookup.
///
/// A hung request would otherwise hold the form in the loading state
/// indefinitely. Expiry is reported as a fetch failure.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent sent with DoH requests.
pub const DEFAULT_USER_AGENT: &str = concat!("url_analyzer/", env!("CARGO_PKG_VERSION"));

/// Message shown in place of the IP addresses when the DoH request cannot complete.
pub const IP_RESOLUTION_FETCH_ERROR: &str =
    "There was an error fetching the IP resolution results! Please try again later.";

/// Message shown in place of the IP addresses when the response carries no usable answer.
pub const IP_RESOLUTION_NO_RESULTS_ERROR: &str = "No resolved IPs found!";

/// Inline validation message for input that is not an absolute URL.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL!";

/// Busy indicator written while a submission is in flight, with or without a lookup.
pub const BUSY_INDICATOR: &str = "Analyzing...";

/// Title of the rendered results table.
pub const RESULTS_TABLE_TITLE: &str = "Analysis Results";

/// Label of the leading resolution row.
pub const IP_ADDRESS_LABEL: &str = "IP Address";

/// Separator between resolved addresses.
pub const IP_LIST_SEPARATOR: &str = ", ";

/// CSS class applied to a flagged (failed resolution) cell in HTML output.
pub const ERROR_CELL_CLASS: &str = "color-red";
