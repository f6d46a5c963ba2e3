//! Form controller: the submit/edit state machine.
//!
//! The controller owns the form lifecycle and orchestrates one analysis per
//! submission:
//!
//! ```text
//! submit ──► Loading ──► decompose ──invalid──► Error (controls re-enabled)
//!                           │
//!                           └─valid─► [resolve] ─► render ─► Idle
//! edit while Error ──► Idle
//! submission dropped while Loading ──► Idle
//! ```
//!
//! All UI effects go through a [`FormView`]; DNS lookups go through an
//! [`IpResolver`]. Both are handed in at construction, so the state machine
//! runs without any UI toolkit or network.

mod state;
mod view;

pub use state::FormState;
pub use view::{FormInput, FormView, SubmitEvent};

use log::{debug, warn};

use crate::config::INVALID_URL_MESSAGE;
use crate::decompose::{decompose, DecomposedUrl};
use crate::dns::IpResolver;
use crate::error_handling::InvalidUrl;
use crate::ip_literal::is_ip_literal;
use crate::render::{render, ResultTable};

/// What a submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The URL was valid and a results table was installed.
    Rendered(ResultTable),
    /// The URL was invalid; the inline error is showing.
    Rejected(InvalidUrl),
}

/// Drives a [`FormView`] through the analysis lifecycle.
pub struct FormController<R, V> {
    resolver: R,
    view: V,
    state: FormState,
}

impl<R: IpResolver, V: FormView> FormController<R, V> {
    /// Creates an idle controller.
    pub fn new(resolver: R, view: V) -> Self {
        Self {
            resolver,
            view,
            state: FormState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// The view the controller drives.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The resolver used for lookups.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Consumes the controller, returning its view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Handles a form submission.
    ///
    /// Suppresses the event's default action, locks the controls, decomposes
    /// the URL and, if the "resolve IP" box is ticked and the hostname is not
    /// already an IPv4 literal, resolves it. Resolution failures become a
    /// flagged table row; an invalid URL clears the results and shows the
    /// inline error instead.
    ///
    /// Controls are unlocked on every path, including when the returned
    /// future is dropped before the lookup finishes. An abandoned submission
    /// leaves the form Idle with the previous results in place.
    pub async fn submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        self.view.clear_error();
        let mut loading = LoadingGuard::enter(&mut self.view, &mut self.state);

        let input = event.input();
        let url = match decompose(&input.url) {
            Ok(url) => url,
            Err(invalid) => {
                debug!("{invalid}");
                loading.view.replace_results(None);
                loading.settle(FormState::Error);
                loading.view.show_error(INVALID_URL_MESSAGE);
                return SubmitOutcome::Rejected(invalid);
            }
        };

        let (resolved_ips, resolution_failed) =
            resolve_for_display(&self.resolver, &url, input.resolve_ip).await;
        let table = render(&url, &resolved_ips, resolution_failed);
        loading.view.replace_results(Some(&table));
        loading.settle(FormState::Idle);

        SubmitOutcome::Rendered(table)
    }

    /// Handles an edit of the URL input.
    ///
    /// Clears an active validation error immediately; otherwise does nothing.
    pub fn on_input_edit(&mut self) {
        if self.state == FormState::Error {
            self.view.clear_error();
            transition(&mut self.state, FormState::Idle);
        }
    }
}

/// Runs the optional lookup and returns the IP cell text and its failure flag.
async fn resolve_for_display<R: IpResolver>(
    resolver: &R,
    url: &DecomposedUrl,
    resolve_ip: bool,
) -> (String, bool) {
    if !resolve_ip {
        return (String::new(), false);
    }
    if is_ip_literal(&url.hostname) {
        debug!("{} is already an IPv4 address, skipping lookup", url.hostname);
        return (String::new(), false);
    }

    match resolver.resolve_ip_address(&url.hostname).await {
        Ok(ips) => (ips, false),
        Err(e) => {
            warn!("IP resolution for {} failed [{}]: {e}", url.hostname, e.kind());
            (e.message().to_string(), true)
        }
    }
}

/// Holds the form in `Loading` with its controls locked.
///
/// Dropping the guard unlocks the controls. If no final state was settled
/// the submission was abandoned and the form returns to Idle.
struct LoadingGuard<'a, V: FormView> {
    view: &'a mut V,
    state: &'a mut FormState,
}

impl<'a, V: FormView> LoadingGuard<'a, V> {
    fn enter(view: &'a mut V, state: &'a mut FormState) -> Self {
        transition(state, FormState::Loading);
        view.set_controls_enabled(false);
        view.set_busy(true);
        Self { view, state }
    }

    fn settle(&mut self, next: FormState) {
        transition(self.state, next);
    }
}

impl<V: FormView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        if *self.state == FormState::Loading {
            warn!("Submission abandoned before the analysis finished");
            transition(self.state, FormState::Idle);
        }
        self.view.set_busy(false);
        self.view.set_controls_enabled(true);
    }
}

fn transition(state: &mut FormState, next: FormState) {
    if *state != next {
        debug!("Form state: {} -> {}", state, next);
        *state = next;
    }
}

#[cfg(test)]
mod tests;
