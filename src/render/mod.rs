//! Results table rendering.
//!
//! [`render`] turns a decomposed URL and the resolution outcome into a
//! [`ResultTable`]: plain data that a view installs wholesale. The table can
//! then be written out as HTML, terminal text or JSON.

mod markup;

use serde::Serialize;

use crate::config::{IP_ADDRESS_LABEL, RESULTS_TABLE_TITLE};
use crate::decompose::{DecomposedUrl, URL_FIELDS};

/// One `label: value` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Header cell text
    pub label: String,
    /// Data cell text
    pub value: String,
    /// Set when the value is a resolution error message rather than data
    pub flagged: bool,
}

impl TableRow {
    fn new(label: &str, value: &str, flagged: bool) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            flagged,
        }
    }
}

/// The rendered analysis of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    /// Table legend
    pub title: String,
    /// Rows in display order
    pub rows: Vec<TableRow>,
}

impl ResultTable {
    /// Finds the row with the given label.
    pub fn row(&self, label: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    /// Row labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }
}

/// Builds the results table for one analysis.
///
/// When `resolved_ips` is non-empty it becomes a leading "IP Address" row,
/// flagged if `resolution_failed` (in which case it holds the error message).
/// Every URL field with a non-empty value follows in [`URL_FIELDS`] order;
/// empty fields are omitted rather than shown blank.
pub fn render(url: &DecomposedUrl, resolved_ips: &str, resolution_failed: bool) -> ResultTable {
    let mut rows = Vec::with_capacity(URL_FIELDS.len() + 1);

    if !resolved_ips.is_empty() {
        rows.push(TableRow::new(
            IP_ADDRESS_LABEL,
            resolved_ips,
            resolution_failed,
        ));
    }

    rows.extend(URL_FIELDS.iter().filter_map(|descriptor| {
        let value = url.get(descriptor.field);
        (!value.is_empty()).then(|| TableRow::new(descriptor.label, value, false))
    }));

    ResultTable {
        title: RESULTS_TABLE_TITLE.to_string(),
        rows,
    }
}
