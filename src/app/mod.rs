//! Terminal front end.
//!
//! This module provides the terminal view and the interactive session loop
//! used by the binary.

pub mod session;
pub mod terminal;

// Re-export public API
pub use session::{run_session, SessionStats};
pub use terminal::TerminalView;
