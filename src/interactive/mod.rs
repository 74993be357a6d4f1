//! Interactive TUI front end
//!
//! Runs the frame loop: measures elapsed time, feeds key and mouse events to
//! the session, ticks it, and renders the snapshot.

mod app;
mod rendering;

pub use app::{Action, App, map_key, run_tui};
pub use rendering::{key_at, ui};
