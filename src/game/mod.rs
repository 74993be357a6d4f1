//! Game session: state machine, animation clock and configuration
//!
//! The session is driven by a single frame loop: input events go in through
//! [`GameSession::handle_event`], time goes in through [`GameSession::tick`],
//! and a [`Snapshot`] comes out for rendering.

mod config;
mod event;
mod guess;
mod phase;
mod session;
mod snapshot;

pub use config::{AnimationTimings, GameConfig, MAX_ATTEMPTS};
pub use event::InputEvent;
pub use guess::{Attempt, GuessBuffer};
pub use phase::{Phase, PhaseClock, Transition};
pub use session::{GameSession, SubmitOutcome};
pub use snapshot::Snapshot;
