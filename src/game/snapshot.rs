//! Read-only per-frame view of a session

use super::guess::Attempt;
use super::phase::Phase;
use crate::core::{KeyboardState, WORD_LEN, Word};

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'s> {
    pub attempts: &'s [Attempt],
    /// Letters typed so far for the next attempt
    pub current_guess: &'s [u8],
    /// Entry animation progress per guess slot (1.0 once settled)
    pub letter_progress: [f32; WORD_LEN],
    pub phase: Phase,
    /// Progress of the active phase timer, `0..=1`; untimed phases report 1.0
    pub progress: f32,
    /// `None` when the keyboard is disabled
    pub keyboard: Option<&'s KeyboardState>,
    /// Only set once the game is lost, or always in reveal mode
    pub target: Option<&'s Word>,
    pub cursor_visible: bool,
    pub hovered: Option<u8>,
}

impl Snapshot<'_> {
    /// How many tiles of the newest attempt are colored
    ///
    /// During [`Phase::Coloring`] tiles flip one by one as the timer runs;
    /// otherwise every tile is shown.
    #[must_use]
    pub fn revealed_tiles(&self) -> usize {
        if self.phase == Phase::Coloring {
            ((self.progress * WORD_LEN as f32).floor() as usize).min(WORD_LEN)
        } else {
            WORD_LEN
        }
    }

    /// Row index the guess buffer is drawn on, if any row is still free
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        let row = self.attempts.len();
        (!self.phase.is_terminal() && row < super::MAX_ATTEMPTS).then_some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameSession};
    use crate::wordlists::Dictionary;

    #[test]
    fn tiles_flip_during_coloring() {
        let dictionary = Dictionary::from_text("abide\ncrane").unwrap();
        let mut session =
            GameSession::with_target(&dictionary, GameConfig::default(), Word::new("abide").unwrap());

        for ch in "crane".chars() {
            session.press_letter(ch);
        }
        session.submit();
        assert_eq!(session.snapshot().revealed_tiles(), 0);

        let coloring = session.config().timings.coloring;
        session.tick(coloring * 0.5);
        assert_eq!(session.snapshot().revealed_tiles(), 2);

        session.tick(coloring);
        assert_eq!(session.snapshot().phase, Phase::Appearing);
        assert_eq!(session.snapshot().revealed_tiles(), WORD_LEN);
    }

    #[test]
    fn active_row_follows_history() {
        let dictionary = Dictionary::from_text("abide\ncrane").unwrap();
        let mut session = GameSession::with_target(
            &dictionary,
            GameConfig::default().without_animations(),
            Word::new("abide").unwrap(),
        );
        assert_eq!(session.snapshot().active_row(), Some(0));

        for ch in "crane".chars() {
            session.press_letter(ch);
        }
        session.submit();
        assert_eq!(session.snapshot().active_row(), Some(1));

        for ch in "abide".chars() {
            session.press_letter(ch);
        }
        session.submit();
        assert_eq!(session.snapshot().active_row(), None);
    }
}
