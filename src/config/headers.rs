//! HTTP header constants for DNS-over-HTTPS requests.

/// Media type of the DoH JSON API, sent as the `Accept` header.
pub const DNS_JSON_MEDIA_TYPE: &str = "application/dns-json";

/// Query parameter carrying the hostname to resolve.
pub const DOH_NAME_PARAM: &str = "name";

/// Query parameter carrying the record type.
pub const DOH_TYPE_PARAM: &str = "type";
