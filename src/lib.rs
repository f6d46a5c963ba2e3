//! url_analyzer library: URL decomposition and DNS-over-HTTPS IPv4 resolution
//!
//! This library splits a URL into its structural components (href, origin,
//! protocol, credentials, host parts, query, fragment), optionally resolves the
//! hostname to IPv4 addresses through a DNS-over-HTTPS JSON endpoint, and
//! renders both as a table. A small state machine ([`FormController`]) ties
//! the pieces together the way an interactive form would.
//!
//! # Example
//!
//! ```no_run
//! use url_analyzer::{decompose, init_resolver, render, Config, IpResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let url = decompose("https://example.com/path?q=1#frag")?;
//! let resolver = init_resolver(&Config::default())?;
//! let (ips, failed) = match resolver.resolve_ip_address(&url.hostname).await {
//!     Ok(ips) => (ips, false),
//!     Err(e) => (e.to_string(), true),
//! };
//! println!("{}", render(&url, &ips, failed).to_text());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Resolution requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod controller;
pub mod decompose;
pub mod dns;
pub mod error_handling;
pub mod initialization;
mod ip_literal;
pub mod render;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel, OutputFormat};
pub use controller::{FormController, FormInput, FormState, FormView, SubmitEvent, SubmitOutcome};
pub use decompose::{can_parse, decompose, DecomposedUrl};
pub use dns::{DohResolver, IpResolver};
pub use error_handling::{InvalidUrl, ResolutionError, ResolutionErrorKind};
pub use initialization::init_resolver;
pub use ip_literal::is_ip_literal;
pub use render::{render, ResultTable, TableRow};
pub use run::{run_analyzer, RunReport};

// Internal run module (wires configuration, resolver and terminal view together)
mod run {
    use std::io::IsTerminal;

    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::BufReader;

    use crate::app::{run_session, SessionStats, TerminalView};
    use crate::config::Config;
    use crate::controller::{FormController, FormInput, SubmitEvent};
    use crate::initialization::init_resolver;

    const PROMPT: &str = "url> ";

    /// Results of an analyzer run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RunReport {
        /// Submissions handled during the run
        pub stats: SessionStats,
        /// Whether the run analyzed a single URL given on the command line
        pub single_shot: bool,
    }

    impl RunReport {
        /// A single-shot run whose URL was rejected.
        pub fn rejected_single_url(&self) -> bool {
            self.single_shot && self.stats.rejected > 0
        }
    }

    /// Runs the analyzer with the provided configuration.
    ///
    /// Analyzes `config.url` once if set; otherwise reads URLs from stdin,
    /// one per line, until end of input. Tables go to stdout and messages to
    /// stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver cannot be initialized or if writing the
    /// results to stdout fails.
    pub async fn run_analyzer(config: Config) -> Result<RunReport> {
        let resolver = init_resolver(&config).context("Failed to initialize DoH resolver")?;
        let interactive = std::io::stdin().is_terminal();
        let view = TerminalView::stdio(config.format, std::io::stderr().is_terminal());
        let mut controller = FormController::new(resolver, view);

        let report = match config.url {
            Some(ref url) => {
                info!("Analyzing {url}");
                let mut event = SubmitEvent::new(FormInput::new(url.as_str(), config.resolve_ip));
                let outcome = controller.submit(&mut event).await;
                let mut stats = SessionStats::default();
                stats.record(&outcome);
                RunReport {
                    stats,
                    single_shot: true,
                }
            }
            None => {
                info!("Reading URLs from stdin");
                let reader = BufReader::new(tokio::io::stdin());
                let prompt = interactive.then_some(PROMPT);
                let stats = run_session(&mut controller, reader, config.resolve_ip, prompt).await;
                RunReport {
                    stats,
                    single_shot: false,
                }
            }
        };

        let mut view = controller.into_view();
        if let Some(e) = view.take_io_error() {
            return Err(e).context("Failed to write results");
        }

        Ok(report)
    }
}
