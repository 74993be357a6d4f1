//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O or timing.
//! All types here are pure, testable, and have clear mathematical properties.

mod keyboard;
mod score;
mod word;

pub use keyboard::{ALPHABET_LEN, KEY_ROWS, KeyboardState};
pub use score::{LetterClassification, Score};
pub use word::{WORD_LEN, Word, WordError};
