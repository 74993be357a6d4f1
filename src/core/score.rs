//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Correct (right letter, right position)
//! - Present (letter is in the target but elsewhere)
//! - Absent (letter is not in the target, or every copy is already accounted for)

use super::Word;
use super::word::WORD_LEN;
use std::fmt;

/// Classification of a single guessed letter
///
/// The derived ordering is the aggregation precedence:
/// `Absent < Present < Correct`. An unseen keyboard key is modelled as `None`,
/// which `Option`'s ordering already places below `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterClassification {
    Absent,
    Present,
    Correct,
}

impl LetterClassification {
    /// Emoji square used for sharing-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Scored feedback for one guess: one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([LetterClassification; WORD_LEN]);

impl Score {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterClassification::Correct; WORD_LEN]);

    /// Wrap a classification array
    #[must_use]
    pub const fn new(classifications: [LetterClassification; WORD_LEN]) -> Self {
        Self(classifications)
    }

    /// Score `guess` against `target`
    ///
    /// Duplicate letters are never over-counted: a guessed letter is only
    /// `Present` while an unconsumed copy remains in the target.
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches are `Correct`; both sides are consumed
    /// 2. Second pass: every other guessed letter consumes the leftmost unconsumed
    ///    matching target letter and becomes `Present`, or is `Absent` if none is left
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterClassification::*, Score, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let target = Word::new("speed").unwrap();
    /// let score = Score::calculate(&guess, &target);
    ///
    /// assert_eq!(score.classifications(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target = target.letters();

        let mut result = [LetterClassification::Absent; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        for i in 0..WORD_LEN {
            if guess[i] == target[i] {
                result[i] = LetterClassification::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LEN {
            if result[i] == LetterClassification::Correct {
                continue;
            }

            let available = (0..WORD_LEN).find(|&j| !consumed[j] && target[j] == guess[i]);
            if let Some(j) = available {
                consumed[j] = true;
                result[i] = LetterClassification::Present;
            }
        }

        Self(result)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[LetterClassification; WORD_LEN] {
        &self.0
    }

    /// Classification at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterClassification {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterClassification::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterClassification::Present)
    }

    fn count(&self, class: LetterClassification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Parse a score from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Score;
    ///
    /// let s1 = Score::parse("GY-GY").unwrap();
    /// let s2 = Score::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(s1, s2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut result = [LetterClassification::Absent; WORD_LEN];
        let mut chars = s.chars();

        for slot in &mut result {
            *slot = LetterClassification::from_char(chars.next()?)?;
        }

        chars.next().is_none().then_some(Self(result))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid score string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::LetterClassification::{Absent, Correct, Present};
    use super::*;

    fn score(guess: &str, target: &str) -> Score {
        Score::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn precedence_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(None < Some(Absent));
    }

    #[test]
    fn score_all_absent() {
        let s = score("abcde", "fghij");
        assert_eq!(s.classifications(), &[Absent; 5]);
        assert_eq!(s.count_correct(), 0);
        assert_eq!(s.count_present(), 0);
    }

    #[test]
    fn score_all_correct() {
        let s = score("abide", "abide");
        assert_eq!(s, Score::PERFECT);
        assert!(s.is_perfect());
    }

    #[test]
    fn score_duplicate_letters_not_double_counted() {
        // Target SPEED has two E's, guess ERASE has two E's: both present, no overcount
        let s = score("erase", "speed");
        assert_eq!(
            s.classifications(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn score_excess_duplicates_become_absent() {
        // The only E in CRANE is taken by the exact match, so earlier E's are absent
        let s = score("eerie", "crane");
        assert_eq!(s.classifications(), &[Absent, Absent, Present, Absent, Correct]);

        // With no exact match the leftmost guessed E takes the single copy
        let s = score("eerie", "bleak");
        assert_eq!(s.classifications(), &[Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn score_exact_match_wins_over_earlier_presence() {
        // Guess has O at 1 and 3, FLOOR has O at 2 and 3: pos 3 is exact, pos 1 takes pos 2
        let s = score("robot", "floor");
        assert_eq!(s.classifications(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn score_exact_match_consumes_before_presence() {
        // HELLO has two L's, so both guessed L's are present
        let s = score("llama", "hello");
        assert_eq!(s.classifications(), &[Present, Present, Absent, Absent, Absent]);

        // Single S in SLATE; guess SASSY: first S exact, remaining S's absent
        let s = score("sassy", "slate");
        assert_eq!(s.classifications(), &[Correct, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn score_parse_valid() {
        let p1 = Score::parse("GYG--").unwrap();
        let p2 = Score::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Score::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.classifications(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn score_parse_invalid() {
        assert!(Score::parse("GYGGYG").is_none());
        assert!(Score::parse("GYG").is_none());
        assert!(Score::parse("GXGGY").is_none());
        assert!(Score::parse("").is_none());
    }

    #[test]
    fn score_to_emoji() {
        let s = score("crane", "slate");
        assert_eq!(s.to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(s.to_string(), s.to_emoji());
    }
}
