//! Game state machine
//!
//! ```text
//! Playing --submit(valid)--> Coloring --timer--> Appearing --timer--> Playing
//!    |                          |--timer, winning attempt--> Won
//!    |                          '--timer, sixth attempt----> Lost
//!    '--submit(unknown word)--> InvalidWord --timer--> Playing
//! any --restart--> Playing (fresh session)
//! ```

use super::config::{GameConfig, MAX_ATTEMPTS};
use super::event::InputEvent;
use super::guess::{Attempt, GuessBuffer};
use super::phase::{Phase, PhaseClock, Transition};
use super::snapshot::Snapshot;
use crate::core::{KeyboardState, Score, Word};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fraction of the cursor blink period during which the cursor is hidden
const CURSOR_HIDDEN_FRACTION: f32 = 0.25;

/// Result of a submit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not playing, or fewer than five letters typed
    Ignored,
    /// Five letters, but not a dictionary word
    InvalidWord,
    /// Scored and appended to the history
    Scored(Score),
}

/// One game: target word, attempt history, guess buffer, phase and timers
///
/// Owned by a single frame loop and mutated only through its methods.
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    rng: StdRng,
    target: Word,
    attempts: Vec<Attempt>,
    guess: GuessBuffer,
    keyboard: KeyboardState,
    phase: Phase,
    clock: PhaseClock,
    pending_win: bool,
    cursor_timer: f32,
    hovered: Option<u8>,
}

impl<'a> GameSession<'a> {
    /// Start a game with an OS-seeded random target
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Self {
        Self::with_rng(dictionary, config, StdRng::from_os_rng())
    }

    /// Start a game drawing targets from `rng`
    #[must_use]
    pub fn with_rng(dictionary: &'a Dictionary, config: GameConfig, mut rng: StdRng) -> Self {
        let target = dictionary.random(&mut rng).clone();
        let session = Self::build(dictionary, config, rng, target);
        session.log_start();
        session
    }

    /// Start a game with a fixed first target; restarts draw randomly
    #[must_use]
    pub fn with_target(dictionary: &'a Dictionary, config: GameConfig, target: Word) -> Self {
        let session = Self::build(dictionary, config, StdRng::from_os_rng(), target);
        session.log_start();
        session
    }

    fn build(dictionary: &'a Dictionary, config: GameConfig, rng: StdRng, target: Word) -> Self {
        Self {
            dictionary,
            config,
            rng,
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            guess: GuessBuffer::new(),
            keyboard: KeyboardState::new(),
            phase: Phase::Playing,
            clock: PhaseClock::idle(),
            pending_win: false,
            cursor_timer: 0.0,
            hovered: None,
        }
    }

    fn log_start(&self) {
        log::info!("new game started ({} words)", self.dictionary.len());
        if self.config.reveal_target {
            log::info!("target word is {}", self.target);
        }
    }

    /// Apply one input event; returns true if the session changed
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Letter(ch) => self.press_letter(ch),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Submit => self.submit() != SubmitOutcome::Ignored,
            InputEvent::Restart => {
                self.restart();
                true
            }
            InputEvent::Hover(key) => self.hover(key),
        }
    }

    /// Type a letter into the guess buffer (Playing only, max five letters)
    pub fn press_letter(&mut self, ch: char) -> bool {
        if self.phase != Phase::Playing || !ch.is_ascii_alphabetic() {
            return false;
        }

        let pushed = self.guess.push(ch as u8, self.config.timings.letter_pop);
        debug_assert!(self.guess.len() <= crate::core::WORD_LEN);
        pushed
    }

    /// Delete the last typed letter (Playing only)
    pub fn backspace(&mut self) -> bool {
        self.phase == Phase::Playing && self.guess.pop()
    }

    /// Submit the guess buffer
    ///
    /// Short guesses are ignored without any state change. With dictionary
    /// checking enabled every five-letter guess must be a dictionary word,
    /// the target included; unknown words keep the buffer and flash
    /// [`Phase::InvalidWord`].
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Playing {
            return SubmitOutcome::Ignored;
        }

        let Some(word) = self.guess.to_word() else {
            log::debug!("ignoring submit with {} letters", self.guess.len());
            return SubmitOutcome::Ignored;
        };

        if self.config.dictionary_check && !self.dictionary.contains(&word) {
            log::debug!("{word} is not in the dictionary");
            self.enter(Phase::InvalidWord);
            return SubmitOutcome::InvalidWord;
        }

        assert!(
            self.attempts.len() < MAX_ATTEMPTS,
            "attempt history overflow: playing with {} attempts",
            self.attempts.len()
        );

        let score = Score::calculate(&word, &self.target);
        log::debug!(
            "attempt {}: {word} {score}",
            self.attempts.len() + 1
        );

        self.keyboard.update(&word, &score);
        self.pending_win = score.is_perfect();
        self.attempts.push(Attempt { word, score });
        self.guess.clear();
        self.enter(Phase::Coloring);

        SubmitOutcome::Scored(score)
    }

    /// Replace the whole session: new target, empty history and keyboard
    pub fn restart(&mut self) {
        let target = self.dictionary.random(&mut self.rng).clone();
        let hovered = self.hovered;
        let rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(0));

        *self = Self::build(self.dictionary, self.config, rng, target);
        self.hovered = hovered;
        self.log_start();
    }

    /// Record the key under the pointer; accepted in every phase
    pub fn hover(&mut self, key: Option<char>) -> bool {
        let key = key
            .filter(char::is_ascii_alphabetic)
            .map(|ch| (ch as u8).to_ascii_uppercase());
        let changed = self.hovered != key;
        self.hovered = key;
        changed
    }

    /// Advance timers by `elapsed` seconds
    ///
    /// Expires at most one phase timer per call and returns the resulting
    /// transition. Time past zero is discarded, not carried over.
    pub fn tick(&mut self, elapsed: f32) -> Option<Transition> {
        let elapsed = elapsed.max(0.0);
        self.guess.tick(elapsed);

        if self.phase == Phase::Playing {
            let period = self.config.timings.cursor_blink;
            self.cursor_timer = if period > 0.0 {
                (self.cursor_timer + elapsed) % period
            } else {
                0.0
            };
        }

        if self.phase.duration(&self.config.timings).is_none() || !self.clock.tick(elapsed) {
            return None;
        }

        let from = self.phase;
        self.enter(self.next_after_timer());
        Some(Transition {
            from,
            to: self.phase,
        })
    }

    /// Where the current phase goes when its timer runs out
    fn next_after_timer(&self) -> Phase {
        match self.phase {
            Phase::InvalidWord | Phase::Appearing => Phase::Playing,
            Phase::Coloring if self.pending_win => Phase::Won,
            Phase::Coloring if self.attempts.len() >= MAX_ATTEMPTS => Phase::Lost,
            Phase::Coloring => Phase::Appearing,
            untimed => untimed,
        }
    }

    /// Switch phase and start its timer
    ///
    /// Zero-length phases resolve on entry, so disabled animations behave
    /// like instant scoring.
    fn enter(&mut self, mut next: Phase) {
        loop {
            log::debug!("phase {} -> {next}", self.phase);
            self.phase = next;
            self.clock = PhaseClock::idle();

            if next == Phase::Playing {
                self.cursor_timer = 0.0;
            }

            match next.duration(&self.config.timings) {
                Some(seconds) if seconds > 0.0 => {
                    self.clock = PhaseClock::start(seconds);
                    return;
                }
                Some(_) => next = self.next_after_timer(),
                None => return,
            }
        }
    }

    /// Read-only view for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        let period = self.config.timings.cursor_blink;
        Snapshot {
            attempts: &self.attempts,
            current_guess: self.guess.letters(),
            letter_progress: self.guess.letter_progress(),
            phase: self.phase,
            progress: self.clock.progress(),
            keyboard: self.config.keyboard_enabled.then_some(&self.keyboard),
            target: (self.phase == Phase::Lost || self.config.reveal_target)
                .then_some(&self.target),
            cursor_visible: self.phase == Phase::Playing
                && self.cursor_timer >= period * CURSOR_HIDDEN_FRACTION,
            hovered: self.hovered,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn current_guess(&self) -> &[u8] {
        self.guess.letters()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seconds left on the active phase timer
    #[must_use]
    pub const fn remaining(&self) -> f32 {
        self.clock.remaining()
    }
}
