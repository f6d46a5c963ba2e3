//! Terminal implementation of the form view.
//!
//! The results container is stdout; the error slot and busy indicator are
//! stderr. A terminal cannot retract printed output, so "clearing" only
//! resets the tracked UI state.

use std::io::{self, Write};

use colored::Colorize;
use log::trace;

use crate::config::{OutputFormat, BUSY_INDICATOR};
use crate::controller::FormView;
use crate::render::ResultTable;

/// Writes controller instructions to a pair of output streams.
pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    show_busy: bool,
    error_shown: bool,
    io_error: Option<io::Error>,
}

impl TerminalView<io::Stdout, io::Stderr> {
    /// View over the process's stdout and stderr.
    pub fn stdio(format: OutputFormat, show_busy: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), format, show_busy)
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    /// View writing tables to `out` and messages to `err`.
    pub fn new(out: O, err: E, format: OutputFormat, show_busy: bool) -> Self {
        Self {
            out,
            err,
            format,
            show_busy,
            error_shown: false,
            io_error: None,
        }
    }

    /// Whether the inline validation error is currently showing.
    pub fn error_shown(&self) -> bool {
        self.error_shown
    }

    /// Takes the first write error encountered since the last call.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    /// Returns the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.io_error.is_none() {
                self.io_error = Some(e);
            }
        }
    }

    fn format_table(&self, table: &ResultTable) -> io::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(table.to_text()),
            OutputFormat::Html => Ok(format!("{}\n", table.to_html())),
            OutputFormat::Json => table
                .to_json()
                .map(|json| format!("{json}\n"))
                .map_err(io::Error::other),
        }
    }
}

impl<O: Write, E: Write> FormView for TerminalView<O, E> {
    fn set_controls_enabled(&mut self, enabled: bool) {
        trace!("Controls {}", if enabled { "enabled" } else { "disabled" });
    }

    fn set_busy(&mut self, busy: bool) {
        if busy && self.show_busy {
            let result = writeln!(self.err, "{}", BUSY_INDICATOR.dimmed());
            self.record(result);
        }
    }

    fn show_error(&mut self, message: &str) {
        self.error_shown = true;
        let result = writeln!(self.err, "{} {}", "✖".red(), message.red());
        self.record(result);
    }

    fn clear_error(&mut self) {
        self.error_shown = false;
    }

    fn replace_results(&mut self, table: Option<&ResultTable>) {
        let Some(table) = table else {
            return;
        };
        let result = self
            .format_table(table)
            .and_then(|rendered| self.out.write_all(rendered.as_bytes()))
            .and_then(|()| self.out.flush());
        self.record(result);
    }
}
