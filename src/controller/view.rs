//! The UI surface the form controller drives.

use crate::render::ResultTable;

/// Rendering target for the form controller.
///
/// Implementations apply the controller's instructions to a concrete UI. The
/// controller never reads state back from the view.
pub trait FormView {
    /// Enables or disables the URL input, the checkbox and the submit control.
    fn set_controls_enabled(&mut self, enabled: bool);

    /// Shows or hides the busy indicator.
    fn set_busy(&mut self, busy: bool);

    /// Shows the inline validation message and marks the input invalid.
    fn show_error(&mut self, message: &str);

    /// Removes the validation message and the invalid marking.
    fn clear_error(&mut self);

    /// Replaces the results container wholesale; `None` empties it.
    fn replace_results(&mut self, table: Option<&ResultTable>);
}

/// The form values read at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    /// Raw contents of the URL input
    pub url: String,
    /// State of the "resolve IP" checkbox
    pub resolve_ip: bool,
}

impl FormInput {
    /// Form values as typed.
    pub fn new(url: impl Into<String>, resolve_ip: bool) -> Self {
        Self {
            url: url.into(),
            resolve_ip,
        }
    }
}

/// A form submission.
///
/// Carries the form values and records whether the default action (page
/// navigation in a browser) was suppressed.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    input: FormInput,
    default_prevented: bool,
}

impl SubmitEvent {
    /// Wraps `input` in a not-yet-handled event.
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            default_prevented: false,
        }
    }

    /// Submitted form values.
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Suppresses the default submit action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<FormInput> for SubmitEvent {
    fn from(input: FormInput) -> Self {
        Self::new(input)
    }
}
