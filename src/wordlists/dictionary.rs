//! Dictionary of playable words
//!
//! An immutable, ordered list of words with O(1) membership testing and
//! uniform random selection of target words.

use super::loader;
use super::WORDS;
use crate::core::{WORD_LEN, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid 5-letter words")]
    Empty,
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable ordered word list
///
/// Guaranteed non-empty, so a target word can always be drawn.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LEN]>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words are supplied.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word.letters()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is empty, which the build guarantees against.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Parse a plain text word list (one word per line)
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the text holds no valid words.
    pub fn from_text(text: &str) -> Result<Self, DictionaryError> {
        Self::new(loader::parse_words(text))
    }

    /// Load a plain text word list from disk
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(words)
    }

    /// Exact-match membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.letters())
    }

    /// Membership test on raw text (case-insensitive); invalid words are never members
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Uniformly pick a word
    pub fn random<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty dictionaries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
