//! Output targets for a [`ResultTable`].

use std::fmt::Write as _;

use colored::Colorize;

use super::ResultTable;
use crate::config::ERROR_CELL_CLASS;

impl ResultTable {
    /// Renders the table as an HTML fragment.
    ///
    /// A flagged value cell carries the `color-red` class. Labels and values
    /// are escaped, so user-supplied URL parts cannot inject markup.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<table>");
        let _ = write!(html, "<legend>{}</legend>", escape_html(&self.title));

        for row in &self.rows {
            let class = if row.flagged {
                format!(" class=\"{ERROR_CELL_CLASS}\"")
            } else {
                String::new()
            };
            let _ = write!(
                html,
                "<tr><th>{}</th><td{}>{}</td></tr>",
                escape_html(&row.label),
                class,
                escape_html(&row.value)
            );
        }

        html.push_str("</table>");
        html
    }

    /// Renders the table as aligned terminal text, flagged values in red.
    pub fn to_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut text = String::new();
        let _ = writeln!(text, "{}", self.title.bold());
        for row in &self.rows {
            let value = if row.flagged {
                row.value.red().to_string()
            } else {
                row.value.clone()
            };
            let _ = writeln!(text, "  {:<width$}  {}", row.label, value);
        }
        text
    }

    /// Renders the table as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
