//! IPv4 literal detection.

use std::sync::LazyLock;

use regex::Regex;

/// One octet: 0-255 written with one to three decimal digits.
const OCTET: &str = r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

static IPV4_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^{OCTET}\.{OCTET}\.{OCTET}\.{OCTET}$");
    Regex::new(&pattern).expect("IPv4 literal pattern is valid")
});

/// Returns `true` if `hostname` is a dotted-decimal IPv4 literal.
///
/// Exactly four dot-separated groups, each a decimal number in `0..=255`
/// written with at most three digits. The whole string must match, so
/// surrounding whitespace, ports or a trailing dot are rejected.
///
/// Resolving such a hostname is meaningless, so callers use this to skip the
/// DNS lookup. It also filters DoH answers down to A-record data.
///
/// # Examples
///
/// ```
/// use url_analyzer::is_ip_literal;
///
/// assert!(is_ip_literal("192.168.1.1"));
/// assert!(!is_ip_literal("999.1.1.1"));
/// assert!(!is_ip_literal("1.2.3"));
/// assert!(!is_ip_literal("example.com"));
/// ```
pub fn is_ip_literal(hostname: &str) -> bool {
    IPV4_LITERAL.is_match(hostname)
}
