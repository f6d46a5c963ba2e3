//! Interactive session: the terminal equivalent of the browser form.
//!
//! Each line read from the input is one user interaction: an edit of the URL
//! field followed by a submission. This models a person resubmitting the same
//! form, not a batch mode. Submissions run one after another through a single
//! controller and each one replaces the previous results; only the outcome
//! counts carry over. Blank lines and `#` comments are skipped.

use std::io::Write;

use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::controller::{FormController, FormInput, FormView, SubmitEvent, SubmitOutcome};
use crate::dns::IpResolver;

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Submissions that rendered a results table
    pub rendered: usize,
    /// Submissions rejected as invalid URLs
    pub rejected: usize,
}

impl SessionStats {
    /// Counts one submit outcome.
    pub fn record(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rendered(_) => self.rendered += 1,
            SubmitOutcome::Rejected(_) => self.rejected += 1,
        }
    }

    /// Total submissions handled.
    pub fn submissions(&self) -> usize {
        self.rendered + self.rejected
    }
}

/// Feeds lines from `reader` to the controller until end of input.
///
/// When `prompt` is given it is written to stderr before each read.
pub async fn run_session<R, V, I>(
    controller: &mut FormController<R, V>,
    mut reader: I,
    resolve_ip: bool,
    prompt: Option<&str>,
) -> SessionStats
where
    R: IpResolver,
    V: FormView,
    I: AsyncBufRead + Unpin,
{
    let mut stats = SessionStats::default();
    let mut line = String::new();

    loop {
        if let Some(prompt) = prompt {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "{prompt}");
            let _ = stderr.flush();
        }

        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to read line from input: {e}");
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        controller.on_input_edit();
        let mut event = SubmitEvent::new(FormInput::new(trimmed, resolve_ip));
        let outcome = controller.submit(&mut event).await;
        stats.record(&outcome);
    }

    info!(
        "Session finished: {} submission(s), {} rendered, {} rejected",
        stats.submissions(),
        stats.rendered,
        stats.rejected
    );
    stats
}
