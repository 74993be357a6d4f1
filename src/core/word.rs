//! Wordle word representation
//!
//! A Word stores exactly five uppercase ASCII letters. There is no sentinel or
//! terminator: the length is part of the type.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored form is uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Self::from_letters(letters)
    }

    /// Create a Word from raw letter bytes (either case)
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LEN]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = letters.map(|b| b.to_ascii_uppercase());
        let text = letters.iter().map(|&b| char::from(b)).collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as an array of uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().filter(|&&b| b == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crañe"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(*b"speed").unwrap();
        assert_eq!(word.text(), "SPEED");
        assert!(Word::from_letters([0, b'A', b'B', b'C', b'D']).is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_count_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'E'), 2);
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'S'), 1);
        assert_eq!(word.count_of(b'Z'), 0);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "abide".parse().unwrap();
        assert_eq!(format!("{word}"), "ABIDE");
    }
}
