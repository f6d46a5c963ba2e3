//! Form lifecycle state.

use strum_macros::EnumIter as EnumIterMacro;

/// Where the form is in its submit cycle.
///
/// `Idle` is initial. `Loading` spans decomposition and resolution of one
/// submission. `Error` is entered when the input is not a valid URL and lasts
/// until the next input edit or submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIterMacro)]
pub enum FormState {
    /// Ready for input
    #[default]
    Idle,
    /// A submission is in flight
    Loading,
    /// The last submission was not a valid URL
    Error,
}

impl FormState {
    /// Lowercase state name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormState::Idle => "idle",
            FormState::Loading => "loading",
            FormState::Error => "error",
        }
    }
}

impl std::fmt::Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
