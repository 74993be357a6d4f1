//! Score command
//!
//! Classifies one guess against one target without starting a game.

use crate::core::{Score, Word};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// Result of scoring a single guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub score: Score,
    /// Whether the guess would pass the dictionary check
    pub in_dictionary: bool,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters, or if the
/// target is not in `dictionary`.
pub fn score_word(guess: &str, target: &str, dictionary: &Dictionary) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;

    if !dictionary.contains(&target) {
        bail!("target {target} is not in the dictionary");
    }

    Ok(ScoreResult {
        score: Score::calculate(&guess, &target),
        in_dictionary: dictionary.contains(&guess),
        guess,
        target,
    })
}
