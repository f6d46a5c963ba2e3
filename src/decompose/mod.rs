//! URL validation and decomposition.
//!
//! Wraps the `url` crate (a WHATWG URL parser) and exposes the structural
//! components of an absolute URL as plain strings, using the same conventions
//! as the browser `URL` accessors: `protocol` keeps its trailing `:`, `search`
//! and `hash` keep their leading `?`/`#`, and absent components are empty.

mod fields;

pub use fields::{FieldDescriptor, UrlField, URL_FIELDS};

use serde::Serialize;
use url::Url;

use crate::error_handling::InvalidUrl;

/// The structural components of one absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecomposedUrl {
    /// Full serialized URL
    pub href: String,
    /// ASCII origin, `"null"` for opaque origins
    pub origin: String,
    /// Scheme followed by `:`
    pub protocol: String,
    /// Userinfo name, or empty
    pub username: String,
    /// Userinfo password, or empty
    pub password: String,
    /// `hostname[:port]`
    pub host: String,
    /// Host without the port
    pub hostname: String,
    /// Empty for the scheme's default port
    pub port: String,
    /// Path, `/` at minimum for special schemes
    pub pathname: String,
    /// Query with its leading `?`, or empty
    pub search: String,
    /// Fragment with its leading `#`, or empty
    pub hash: String,
}

impl DecomposedUrl {
    /// Returns the attribute named by `field`.
    pub fn get(&self, field: UrlField) -> &str {
        match field {
            UrlField::Href => &self.href,
            UrlField::Origin => &self.origin,
            UrlField::Protocol => &self.protocol,
            UrlField::Username => &self.username,
            UrlField::Password => &self.password,
            UrlField::Host => &self.host,
            UrlField::Hostname => &self.hostname,
            UrlField::Port => &self.port,
            UrlField::Pathname => &self.pathname,
            UrlField::Search => &self.search,
            UrlField::Hash => &self.hash,
        }
    }
}

impl From<&Url> for DecomposedUrl {
    fn from(url: &Url) -> Self {
        let hostname = url.host_str().unwrap_or_default().to_string();
        // `port()` is None for the scheme's default port
        let port = url.port().map(|p| p.to_string()).unwrap_or_default();
        let host = if port.is_empty() {
            hostname.clone()
        } else {
            format!("{hostname}:{port}")
        };

        Self {
            href: url.as_str().to_string(),
            origin: url.origin().ascii_serialization(),
            protocol: format!("{}:", url.scheme()),
            username: url.username().to_string(),
            password: url.password().unwrap_or_default().to_string(),
            host,
            hostname,
            port,
            pathname: url.path().to_string(),
            search: prefixed('?', url.query()),
            hash: prefixed('#', url.fragment()),
        }
    }
}

fn prefixed(prefix: char, component: Option<&str>) -> String {
    match component {
        Some(value) if !value.is_empty() => format!("{prefix}{value}"),
        _ => String::new(),
    }
}

/// Returns `true` if `raw` parses as an absolute URL.
pub fn can_parse(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Validates `raw` and splits it into its components.
///
/// No normalization is applied beyond what the URL parser itself does, so a
/// bare domain such as `example.com` is rejected as relative.
///
/// # Errors
///
/// Returns [`InvalidUrl`] if `raw` is not a syntactically valid absolute URL.
///
/// # Examples
///
/// ```
/// use url_analyzer::decompose;
///
/// let url = decompose("https://user@example.com:8443/a?b=1#c").unwrap();
/// assert_eq!(url.protocol, "https:");
/// assert_eq!(url.host, "example.com:8443");
/// assert_eq!(url.search, "?b=1");
/// assert!(decompose("example.com").is_err());
/// ```
pub fn decompose(raw: &str) -> Result<DecomposedUrl, InvalidUrl> {
    Url::parse(raw)
        .map(|url| DecomposedUrl::from(&url))
        .map_err(|reason| InvalidUrl {
            input: raw.to_string(),
            reason,
        })
}
