//! Game configuration
//!
//! One parameterised session replaces per-variant game loops: dictionary
//! checking, the keyboard heat-map and every animation duration are options.

/// Maximum number of scored attempts per game
pub const MAX_ATTEMPTS: usize = 6;

/// Durations in seconds for the timed phases and presentation micro-timers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTimings {
    /// Flash shown after submitting a word that is not in the dictionary
    pub invalid_word: f32,
    /// Tile-by-tile reveal of a scored attempt
    pub coloring: f32,
    /// Fade-in of the next empty row
    pub appearing: f32,
    /// Pop animation of a freshly typed letter
    pub letter_pop: f32,
    /// Full blink period of the input cursor
    pub cursor_blink: f32,
}

impl AnimationTimings {
    /// Every phase resolves immediately
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            invalid_word: 0.0,
            coloring: 0.0,
            appearing: 0.0,
            letter_pop: 0.0,
            cursor_blink: 1.0,
        }
    }
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            invalid_word: 0.6,
            coloring: 1.0,
            appearing: 0.25,
            letter_pop: 0.1,
            cursor_blink: 1.0,
        }
    }
}

/// Options recognised by a [`GameSession`](super::GameSession)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Reject guesses that are not dictionary words
    pub dictionary_check: bool,
    /// Expose the keyboard heat-map in snapshots
    pub keyboard_enabled: bool,
    /// Debug toggle: log the target on every start and show it in snapshots
    pub reveal_target: bool,
    pub timings: AnimationTimings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_check: true,
            keyboard_enabled: true,
            reveal_target: false,
            timings: AnimationTimings::default(),
        }
    }
}

impl GameConfig {
    /// Same options with every phase resolved immediately
    #[must_use]
    pub const fn without_animations(mut self) -> Self {
        self.timings = AnimationTimings::instant();
        self
    }
}
