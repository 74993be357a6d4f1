//! Guess buffer and scored attempts

use super::phase::PhaseClock;
use crate::core::{Score, WORD_LEN, Word};

/// A submitted word together with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub score: Score,
}

/// Letters typed for the attempt in progress
///
/// Holds 0..=5 uppercase letters, each with its own entry-animation timer.
#[derive(Debug, Clone, Default)]
pub struct GuessBuffer {
    letters: [u8; WORD_LEN],
    len: usize,
    pops: [PhaseClock; WORD_LEN],
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ASCII letter; false if the buffer is full or `letter` is not a letter
    pub fn push(&mut self, letter: u8, pop_seconds: f32) -> bool {
        if self.is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }

        self.letters[self.len] = letter.to_ascii_uppercase();
        self.pops[self.len] = PhaseClock::start(pop_seconds);
        self.len += 1;
        true
    }

    /// Remove the last letter; false if the buffer is empty
    pub fn pop(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }

        self.len -= 1;
        self.pops[self.len] = PhaseClock::idle();
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Advance every letter's entry animation
    pub fn tick(&mut self, elapsed: f32) {
        for pop in &mut self.pops[..self.len] {
            pop.tick(elapsed);
        }
    }

    /// Typed letters, uppercase
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len]
    }

    /// Entry animation progress per slot; empty slots and settled letters report 1.0
    #[must_use]
    pub fn letter_progress(&self) -> [f32; WORD_LEN] {
        self.pops.map(|pop| pop.progress())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == WORD_LEN
    }

    /// The buffer as a word, once all five letters are present
    #[must_use]
    pub fn to_word(&self) -> Option<Word> {
        if self.is_full() {
            Word::from_letters(self.letters).ok()
        } else {
            None
        }
    }
}
