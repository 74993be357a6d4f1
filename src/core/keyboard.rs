//! Keyboard heat-map
//!
//! Folds scored guesses into the best classification seen per letter.

use super::score::{LetterClassification, Score};
use super::Word;

/// Number of letter keys
pub const ALPHABET_LEN: usize = 26;

/// QWERTY rows as drawn by the front ends
pub const KEY_ROWS: [&[u8]; 3] = [b"QWERTYUIOP", b"ASDFGHJKL", b"ZXCVBNM"];

/// Best-seen classification for each of the 26 letters
///
/// `None` means the letter has not been guessed yet. Values only ever move up
/// the precedence order `None < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    keys: [Option<LetterClassification>; ALPHABET_LEN],
}

impl KeyboardState {
    /// A keyboard with every key unseen
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: [None; ALPHABET_LEN],
        }
    }

    /// Fold one scored guess into the keyboard
    ///
    /// Each letter keeps the higher-precedence of its stored and new
    /// classification, so applying the same update twice is a no-op.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{KeyboardState, LetterClassification, Score, Word};
    ///
    /// let target = Word::new("speed").unwrap();
    /// let guess = Word::new("erase").unwrap();
    ///
    /// let mut keyboard = KeyboardState::new();
    /// keyboard.update(&guess, &Score::calculate(&guess, &target));
    ///
    /// assert_eq!(keyboard.get(b'E'), Some(LetterClassification::Present));
    /// assert_eq!(keyboard.get(b'R'), Some(LetterClassification::Absent));
    /// assert_eq!(keyboard.get(b'Z'), None);
    /// ```
    pub fn update(&mut self, guess: &Word, score: &Score) {
        for (&letter, &class) in guess.letters().iter().zip(score.classifications()) {
            if let Some(slot) = Self::slot(letter) {
                let key = &mut self.keys[slot];
                *key = (*key).max(Some(class));
            }
        }
    }

    /// Stored classification for `letter` (either case); `None` if unseen or not a letter
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterClassification> {
        Self::slot(letter).and_then(|slot| self.keys[slot])
    }

    /// Iterate over `(letter, classification)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<LetterClassification>)> + '_ {
        (b'A'..=b'Z').zip(self.keys.iter().copied())
    }

    /// Forget every key
    pub fn reset(&mut self) {
        self.keys = [None; ALPHABET_LEN];
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}
