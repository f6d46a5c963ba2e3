//! Form controller state-machine tests.

use super::*;
use crate::error_handling::{ResolutionError, ResolutionErrorKind};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    ControlsEnabled(bool),
    Busy(bool),
    ShowError(String),
    ClearError,
    Results(Option<Vec<String>>),
    Resolve(String),
}

type EventLog = Arc<Mutex<Vec<Event>>>;

/// View that records every instruction and tracks the resulting UI.
#[derive(Default)]
struct RecordingView {
    log: EventLog,
    controls_enabled: bool,
    busy: bool,
    error: Option<String>,
    results: Option<ResultTable>,
}

impl RecordingView {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            controls_enabled: true,
            ..Default::default()
        }
    }

    fn push(&self, event: Event) {
        self.log.lock().unwrap().push(event);
    }
}

impl FormView for RecordingView {
    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
        self.push(Event::ControlsEnabled(enabled));
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.push(Event::Busy(busy));
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.push(Event::ShowError(message.to_string()));
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.push(Event::ClearError);
    }

    fn replace_results(&mut self, table: Option<&ResultTable>) {
        self.results = table.cloned();
        self.push(Event::Results(
            table.map(|t| t.labels().iter().map(|l| l.to_string()).collect()),
        ));
    }
}

/// Resolver double returning a canned outcome and logging each call.
struct StubResolver {
    log: EventLog,
    outcome: Result<String, ResolutionError>,
}

impl IpResolver for StubResolver {
    async fn resolve_ip_address(&self, hostname: &str) -> Result<String, ResolutionError> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Resolve(hostname.to_string()));
        self.outcome.clone()
    }
}

fn controller_with(
    outcome: Result<String, ResolutionError>,
) -> (FormController<StubResolver, RecordingView>, EventLog) {
    let log = EventLog::default();
    let resolver = StubResolver {
        log: Arc::clone(&log),
        outcome,
    };
    let view = RecordingView::new(Arc::clone(&log));
    (FormController::new(resolver, view), log)
}

fn resolve_calls(log: &EventLog) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Event::Resolve(host) => Some(host.clone()),
            _ => None,
        })
        .collect()
}

fn submit_event(url: &str, resolve_ip: bool) -> SubmitEvent {
    SubmitEvent::new(FormInput::new(url, resolve_ip))
}

#[tokio::test]
async fn test_submit_prevents_default() {
    let (mut controller, _log) = controller_with(Ok(String::new()));
    let mut event = submit_event("https://example.com", false);
    assert!(!event.default_prevented());
    controller.submit(&mut event).await;
    assert!(event.default_prevented());

    let mut event = submit_event("not a url", false);
    controller.submit(&mut event).await;
    assert!(event.default_prevented());
}

#[tokio::test]
async fn test_valid_url_without_resolution() {
    let (mut controller, log) = controller_with(Ok("1.2.3.4".to_string()));
    let outcome = controller
        .submit(&mut submit_event("https://example.com/path?q=1#frag", false))
        .await;

    let SubmitOutcome::Rendered(table) = outcome else {
        panic!("expected a rendered table, got {outcome:?}");
    };
    assert_eq!(
        table.labels(),
        ["href", "Origin", "Protocol", "Host", "Hostname", "Search", "Hash"]
    );
    assert!(resolve_calls(&log).is_empty());
    assert_eq!(controller.state(), FormState::Idle);

    let view = controller.view();
    assert_eq!(view.results.as_ref(), Some(&table));
    assert!(view.controls_enabled);
    assert!(!view.busy);
    assert!(view.error.is_none());
}

#[tokio::test]
async fn test_lifecycle_order_with_resolution() {
    let (mut controller, log) = controller_with(Ok("93.184.216.34".to_string()));
    controller
        .submit(&mut submit_event("https://example.com/", true))
        .await;

    let events = log.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            Event::ClearError,
            Event::ControlsEnabled(false),
            Event::Busy(true),
            Event::Resolve("example.com".to_string()),
            Event::Results(Some(vec![
                "IP Address".to_string(),
                "href".to_string(),
                "Origin".to_string(),
                "Protocol".to_string(),
                "Host".to_string(),
                "Hostname".to_string(),
            ])),
            Event::Busy(false),
            Event::ControlsEnabled(true),
        ]
    );

    let row = controller.view().results.as_ref().unwrap().rows[0].clone();
    assert_eq!(row.value, "93.184.216.34");
    assert!(!row.flagged);
}

#[tokio::test]
async fn test_ip_literal_host_skips_resolution() {
    let (mut controller, log) = controller_with(Ok("9.9.9.9".to_string()));
    let outcome = controller
        .submit(&mut submit_event("http://127.0.0.1/", true))
        .await;

    assert!(resolve_calls(&log).is_empty());
    let SubmitOutcome::Rendered(table) = outcome else {
        panic!("expected a rendered table");
    };
    assert!(table.row("IP Address").is_none());
    assert_eq!(table.row("Hostname").unwrap().value, "127.0.0.1");
}

#[tokio::test]
async fn test_fetch_failure_rendered_as_flagged_row() {
    let (mut controller, _log) = controller_with(Err(ResolutionError::fetch_failure()));
    let outcome = controller
        .submit(&mut submit_event("https://example.com/", true))
        .await;

    let SubmitOutcome::Rendered(table) = outcome else {
        panic!("resolution failures must still render");
    };
    let row = table.row("IP Address").unwrap();
    assert!(row.flagged);
    assert_eq!(
        row.value,
        "There was an error fetching the IP resolution results! Please try again later."
    );
    assert_eq!(controller.state(), FormState::Idle);
    assert!(controller.view().controls_enabled);
    assert!(!controller.view().busy);
    assert!(controller.view().error.is_none());
}

#[tokio::test]
async fn test_no_results_rendered_as_flagged_row() {
    let (mut controller, _log) = controller_with(Err(ResolutionErrorKind::NoResults.into()));
    let outcome = controller
        .submit(&mut submit_event("https://example.com/", true))
        .await;

    let SubmitOutcome::Rendered(table) = outcome else {
        panic!("resolution failures must still render");
    };
    let row = table.row("IP Address").unwrap();
    assert!(row.flagged);
    assert_eq!(row.value, "No resolved IPs found!");
}

#[tokio::test]
async fn test_invalid_url_enters_error_and_clears_results() {
    let (mut controller, log) = controller_with(Ok("1.2.3.4".to_string()));
    controller
        .submit(&mut submit_event("https://example.com/", false))
        .await;
    assert!(controller.view().results.is_some());

    log.lock().unwrap().clear();
    let outcome = controller
        .submit(&mut submit_event("example.com", true))
        .await;

    let SubmitOutcome::Rejected(invalid) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(invalid.input, "example.com");
    assert_eq!(controller.state(), FormState::Error);
    assert!(resolve_calls(&log).is_empty());

    let view = controller.view();
    assert!(view.results.is_none());
    assert_eq!(view.error.as_deref(), Some("Invalid URL!"));
    assert!(view.controls_enabled);
    assert!(!view.busy);

    let events = log.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            Event::ClearError,
            Event::ControlsEnabled(false),
            Event::Busy(true),
            Event::Results(None),
            Event::ShowError("Invalid URL!".to_string()),
            Event::Busy(false),
            Event::ControlsEnabled(true),
        ]
    );
}

#[tokio::test]
async fn test_edit_clears_error_before_resubmission() {
    let (mut controller, log) = controller_with(Ok(String::new()));
    controller.submit(&mut submit_event("::", false)).await;
    assert_eq!(controller.state(), FormState::Error);

    log.lock().unwrap().clear();
    controller.on_input_edit();

    assert_eq!(controller.state(), FormState::Idle);
    assert!(controller.view().error.is_none());
    assert_eq!(log.lock().unwrap().clone(), vec![Event::ClearError]);
}

#[tokio::test]
async fn test_edit_outside_error_is_noop() {
    let (mut controller, log) = controller_with(Ok(String::new()));
    controller.on_input_edit();
    assert_eq!(controller.state(), FormState::Idle);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_resubmit_from_error_recovers() {
    let (mut controller, _log) = controller_with(Ok("1.1.1.1".to_string()));
    controller.submit(&mut submit_event("nope", true)).await;
    assert_eq!(controller.state(), FormState::Error);

    let outcome = controller
        .submit(&mut submit_event("https://one.one.one.one/", true))
        .await;
    assert!(matches!(outcome, SubmitOutcome::Rendered(_)));
    assert_eq!(controller.state(), FormState::Idle);
    assert!(controller.view().error.is_none());
}

#[tokio::test]
async fn test_empty_resolution_result_omits_ip_row() {
    let (mut controller, log) = controller_with(Ok(String::new()));
    let outcome = controller
        .submit(&mut submit_event("https://example.com/", true))
        .await;

    assert_eq!(resolve_calls(&log), ["example.com"]);
    let SubmitOutcome::Rendered(table) = outcome else {
        panic!("expected a rendered table");
    };
    assert!(table.row("IP Address").is_none());
}

/// Resolver whose lookup never completes.
struct StalledResolver;

impl IpResolver for StalledResolver {
    async fn resolve_ip_address(&self, _hostname: &str) -> Result<String, ResolutionError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_abandoned_submission_unlocks_form() {
    let log = EventLog::default();
    let view = RecordingView::new(Arc::clone(&log));
    let mut controller = FormController::new(StalledResolver, view);

    let mut event = submit_event("https://example.com/", true);
    let result = tokio::time::timeout(
        std::time::Duration::from_millis(50),
        controller.submit(&mut event),
    )
    .await;
    assert!(result.is_err(), "lookup should still be pending");

    assert_eq!(controller.state(), FormState::Idle);
    assert!(controller.view().controls_enabled);
    assert!(!controller.view().busy);
    assert!(controller.view().results.is_none());
    assert_eq!(
        log.lock().unwrap().clone(),
        vec![
            Event::ClearError,
            Event::ControlsEnabled(false),
            Event::Busy(true),
            Event::Busy(false),
            Event::ControlsEnabled(true),
        ]
    );

    let outcome = controller
        .submit(&mut submit_event("http://10.0.0.1/", true))
        .await;
    assert!(matches!(outcome, SubmitOutcome::Rendered(_)));
    assert_eq!(controller.state(), FormState::Idle);

    controller.submit(&mut submit_event("nope", false)).await;
    assert_eq!(controller.state(), FormState::Error);
    controller.on_input_edit();
    assert_eq!(controller.state(), FormState::Idle);
}
