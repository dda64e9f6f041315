//! roiedit Application
//!
//! Headless host for the overlay canvas: replays a recorded input session
//! against a recording engine and reports what the engine received.

mod session;
mod shortcuts;

pub use session::{AppError, ObjectSummary, Replay, SceneSummary, Session, SessionEvent, run_file};
pub use shortcuts::{Shortcut, ShortcutRegistry};
