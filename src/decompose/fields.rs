//! Ordered field descriptors driving the results table.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// A structural attribute of a decomposed URL.
///
/// Names follow the WHATWG `URL` accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlField {
    /// Full serialization
    Href,
    /// Scheme, host and port
    Origin,
    /// Scheme with trailing `:`
    Protocol,
    /// Userinfo name
    Username,
    /// Userinfo password
    Password,
    /// Hostname plus non-default port
    Host,
    /// Host without port
    Hostname,
    /// Explicit non-default port
    Port,
    /// Path
    Pathname,
    /// Query with leading `?`
    Search,
    /// Fragment with leading `#`
    Hash,
}

impl UrlField {
    /// The accessor name (`"href"`, `"hostname"`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            UrlField::Href => "href",
            UrlField::Origin => "origin",
            UrlField::Protocol => "protocol",
            UrlField::Username => "username",
            UrlField::Password => "password",
            UrlField::Host => "host",
            UrlField::Hostname => "hostname",
            UrlField::Port => "port",
            UrlField::Pathname => "pathname",
            UrlField::Search => "search",
            UrlField::Hash => "hash",
        }
    }
}

/// Pairs a URL attribute with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Attribute shown in the row
    pub field: UrlField,
    /// Row label
    pub label: &'static str,
}

/// Rows of the results table, in display order.
///
/// The path is deliberately absent: the table shows it as part of `href`.
pub const URL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        field: UrlField::Href,
        label: "href",
    },
    FieldDescriptor {
        field: UrlField::Origin,
        label: "Origin",
    },
    FieldDescriptor {
        field: UrlField::Protocol,
        label: "Protocol",
    },
    FieldDescriptor {
        field: UrlField::Username,
        label: "Username",
    },
    FieldDescriptor {
        field: UrlField::Password,
        label: "Password",
    },
    FieldDescriptor {
        field: UrlField::Host,
        label: "Host",
    },
    FieldDescriptor {
        field: UrlField::Hostname,
        label: "Hostname",
    },
    FieldDescriptor {
        field: UrlField::Port,
        label: "Port",
    },
    FieldDescriptor {
        field: UrlField::Search,
        label: "Search",
    },
    FieldDescriptor {
        field: UrlField::Hash,
        label: "Hash",
    },
];
