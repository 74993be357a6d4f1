//! Game phases and the countdown that drives them
//!
//! Exactly one phase is active at a time. Timed phases own a [`PhaseClock`]
//! that the frame loop drains with externally measured elapsed time.

use super::config::AnimationTimings;
use std::fmt;

/// Active step of the reveal/animation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting letters, backspace and submissions
    Playing,
    /// Brief flash after submitting a word missing from the dictionary
    InvalidWord,
    /// The newest attempt is being revealed tile by tile
    Coloring,
    /// The next empty row is fading in
    Appearing,
    /// Target guessed; terminal until restart
    Won,
    /// Attempts exhausted; terminal until restart
    Lost,
}

impl Phase {
    /// Name used in logs and status lines
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::InvalidWord => "InvalidWord",
            Self::Coloring => "Coloring",
            Self::Appearing => "Appearing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Won and Lost absorb every event except restart
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Countdown length for this phase, `None` for untimed phases
    #[must_use]
    pub const fn duration(self, timings: &AnimationTimings) -> Option<f32> {
        match self {
            Self::InvalidWord => Some(timings.invalid_word),
            Self::Coloring => Some(timings.coloring),
            Self::Appearing => Some(timings.appearing),
            Self::Playing | Self::Won | Self::Lost => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A phase change reported by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
}

/// Single countdown timer in seconds
///
/// Remaining time is clamped at zero; overshoot past zero is discarded rather
/// than carried into the next phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseClock {
    total: f32,
    remaining: f32,
}

impl PhaseClock {
    /// A clock that has already run out
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            total: 0.0,
            remaining: 0.0,
        }
    }

    /// Start a countdown of `seconds` (negative values count as zero)
    #[must_use]
    pub fn start(seconds: f32) -> Self {
        let seconds = seconds.max(0.0);
        Self {
            total: seconds,
            remaining: seconds,
        }
    }

    /// Drain `elapsed` seconds; returns true when this call reached zero
    ///
    /// Negative or NaN elapsed time is treated as zero. A clock that was
    /// already expired never reports expiry again.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        if self.is_expired() {
            return false;
        }

        self.remaining = (self.remaining - elapsed.max(0.0)).max(0.0);
        self.is_expired()
    }

    /// True once the countdown has reached zero
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Seconds left
    #[must_use]
    pub const fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Configured length of this countdown
    #[must_use]
    pub const fn total(&self) -> f32 {
        self.total
    }

    /// `1 - remaining/total`, in `0..=1`; zero-length clocks are complete
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.total <= 0.0 {
            1.0
        } else {
            (1.0 - self.remaining / self.total).clamp(0.0, 1.0)
        }
    }
}
