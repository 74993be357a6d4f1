//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line, animations are
//! fast-forwarded so each line is answered immediately.

use crate::core::WORD_LEN;
use crate::game::{GameSession, InputEvent, MAX_ATTEMPTS, Phase, SubmitOutcome};
use crate::output::{colored_attempt, colored_keyboard};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Upper bound on timer expiries needed to settle any phase chain
const MAX_SETTLE_STEPS: usize = 8;

/// Run the simple interactive CLI mode
///
/// Reads guesses and commands (`new`, `quit`) from `input` until end of input
/// or `quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(output, "{}", "  W O R D L E".bright_green().bold())?;
    writeln!(output, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        output,
        "Guess the {WORD_LEN}-letter word in {MAX_ATTEMPTS} tries. Commands: 'new', 'quit'\n"
    )?;
    prompt(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" | "restart" => {
                session.handle_event(InputEvent::Restart);
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            "" => {}
            _ => play_line(session, line, &mut output)?,
        }

        prompt(session, &mut output)?;
    }

    Ok(())
}

fn prompt<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    if !session.phase().is_terminal() {
        write!(output, "Guess {}/{MAX_ATTEMPTS}: ", session.attempts().len() + 1)?;
        output.flush()?;
    }
    Ok(())
}

/// Type `line` into the session, submit it and report the result
fn play_line<W: Write>(session: &mut GameSession, line: &str, output: &mut W) -> Result<()> {
    if session.phase().is_terminal() {
        writeln!(output, "Game over. Type 'new' to play again or 'quit' to exit.")?;
        return Ok(());
    }

    // Anything typed before an invalid word is still in the buffer
    while session.handle_event(InputEvent::Backspace) {}

    if line.chars().count() != WORD_LEN {
        writeln!(output, "{}", format!("❌ Guess must be {WORD_LEN} letters").red())?;
        return Ok(());
    }

    for ch in line.chars() {
        session.handle_event(InputEvent::Letter(ch));
    }

    let outcome = session.submit();
    settle(session);

    match outcome {
        SubmitOutcome::Ignored => {
            writeln!(output, "{}", "❌ Letters only, please".red())?;
        }
        SubmitOutcome::InvalidWord => {
            writeln!(output, "{}", "❌ Not in word list".red())?;
        }
        SubmitOutcome::Scored(_) => print_board(session, output)?,
    }

    match session.phase() {
        Phase::Won => {
            writeln!(
                output,
                "\n{}",
                format!(
                    "🎉 Solved in {} {}!",
                    session.attempts().len(),
                    if session.attempts().len() == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
            writeln!(output, "Type 'new' to play again or 'quit' to exit.")?;
        }
        Phase::Lost => {
            writeln!(
                output,
                "\n{} {}",
                "💀 Out of guesses. The word was".red(),
                session.target().text().bright_yellow().bold()
            )?;
            writeln!(output, "Type 'new' to play again or 'quit' to exit.")?;
        }
        _ => {}
    }

    Ok(())
}

/// Run every pending animation to completion
fn settle(session: &mut GameSession) {
    for _ in 0..MAX_SETTLE_STEPS {
        if session.tick(f32::MAX).is_none() {
            break;
        }
    }
}

fn print_board<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    writeln!(output)?;
    for attempt in session.attempts() {
        writeln!(output, "  {}", colored_attempt(attempt))?;
    }

    if let Some(keyboard) = session.snapshot().keyboard {
        writeln!(output, "\n{}\n", colored_keyboard(keyboard))?;
    }

    Ok(())
}
