//! Formatting utilities for terminal output

use crate::core::{KEY_ROWS, KeyboardState, LetterClassification, Score, Word};
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// Paint one letter with the background of its classification
fn paint(letter: u8, class: Option<LetterClassification>) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match class {
        Some(LetterClassification::Correct) => text.black().on_green().bold(),
        Some(LetterClassification::Present) => text.black().on_yellow().bold(),
        Some(LetterClassification::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Format a scored attempt as a row of colored tiles
#[must_use]
pub fn colored_attempt(attempt: &Attempt) -> String {
    attempt
        .word
        .letters()
        .iter()
        .zip(attempt.score.classifications())
        .map(|(&letter, &class)| paint(letter, Some(class)).to_string())
        .collect()
}

/// Format the keyboard heat-map as three indented QWERTY rows
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> String {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .iter()
                .map(|&key| paint(key, keyboard.get(key)).to_string())
                .collect();
            format!("{}{keys}", "  ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain one-line summary: `GUESS 🟩🟨⬜⬜⬜`
#[must_use]
pub fn score_line(guess: &Word, score: &Score) -> String {
    format!("{guess} {}", score.to_emoji())
}
