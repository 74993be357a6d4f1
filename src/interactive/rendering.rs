//! TUI rendering with ratatui
//!
//! Draws a [`Snapshot`]: the attempt grid, the row being typed, the keyboard
//! heat-map and a status line. All animation state comes from the snapshot.

use crate::core::{KEY_ROWS, LetterClassification, WORD_LEN};
use crate::game::{MAX_ATTEMPTS, Phase, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const KEY_HEIGHT: u16 = 3;

/// Screen regions
struct ScreenLayout {
    header: Rect,
    board: Rect,
    message: Rect,
    keyboard: Rect,
    help: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // Header
            Constraint::Length(TILE_HEIGHT * MAX_ATTEMPTS as u16), // Board
            Constraint::Length(1),                                // Message
            Constraint::Length(KEY_HEIGHT * KEY_ROWS.len() as u16), // Keyboard
            Constraint::Length(1),                                // Help
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        board: chunks[1],
        message: chunks[2],
        keyboard: chunks[3],
        help: chunks[4],
    }
}

/// Split `area` into `count` centered cells of `width` columns
fn centered_cells(area: Rect, count: usize, width: u16) -> std::rc::Rc<[Rect]> {
    Layout::horizontal(vec![Constraint::Length(width); count])
        .flex(Flex::Center)
        .spacing(1)
        .split(area)
}

/// Keyboard key areas for a frame of size `area`
fn key_areas(area: Rect) -> Vec<(u8, Rect)> {
    let keyboard = screen_layout(area).keyboard;
    let rows = Layout::vertical(vec![Constraint::Length(KEY_HEIGHT); KEY_ROWS.len()]).split(keyboard);

    KEY_ROWS
        .iter()
        .zip(rows.iter())
        .flat_map(|(keys, &row)| {
            let cells = centered_cells(row, keys.len(), KEY_WIDTH);
            keys.iter().copied().zip(cells.to_vec())
        })
        .collect()
}

/// Keyboard key under terminal cell (`column`, `row`)
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<u8> {
    key_areas(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(key, _)| key)
}

/// Background color for a classification
const fn class_color(class: LetterClassification) -> Color {
    match class {
        LetterClassification::Correct => Color::Green,
        LetterClassification::Present => Color::Yellow,
        LetterClassification::Absent => Color::DarkGray,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, snapshot: &Snapshot) {
    let layout = screen_layout(f.area());

    render_header(f, snapshot, layout.header);
    render_board(f, snapshot, layout.board);
    render_message(f, snapshot, layout.message);
    if let Some(keyboard) = snapshot.keyboard {
        render_keyboard(f, keyboard, snapshot.hovered, f.area());
    }
    render_help(f, layout.help);
}

fn render_header(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut title = vec![Span::styled(
        "WORDLE",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if snapshot.phase != Phase::Lost
        && let Some(target) = snapshot.target
    {
        title.push(Span::styled(
            format!("  [debug: {target}]"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(title))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tile(f: &mut Frame, area: Rect, letter: Option<u8>, fill: Option<Color>, border: Style) {
    let text = letter.map(|l| char::from(l).to_string()).unwrap_or_default();
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(color) = fill {
        style = style.bg(color).fg(Color::Black);
    }

    let tile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(tile, area);
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let rows = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); MAX_ATTEMPTS]).split(area);
    let newest = snapshot.attempts.len().checked_sub(1);
    let idle = Style::default().fg(Color::Gray);

    for (row_index, &row) in rows.iter().enumerate() {
        let cells = centered_cells(row, WORD_LEN, TILE_WIDTH);

        if let Some(attempt) = snapshot.attempts.get(row_index) {
            let shown = if Some(row_index) == newest {
                snapshot.revealed_tiles()
            } else {
                WORD_LEN
            };
            for (i, &cell) in cells.iter().enumerate() {
                let fill = (i < shown).then(|| class_color(attempt.score.at(i)));
                render_tile(f, cell, Some(attempt.word.letter_at(i)), fill, idle);
            }
        } else if snapshot.active_row() == Some(row_index) {
            render_active_row(f, snapshot, &cells);
        } else {
            for &cell in cells.iter() {
                render_tile(f, cell, None, None, Style::default().fg(Color::DarkGray));
            }
        }
    }
}

fn render_active_row(f: &mut Frame, snapshot: &Snapshot, cells: &[Rect]) {
    let border = match snapshot.phase {
        Phase::InvalidWord => Style::default().fg(Color::Red),
        // Next row stays dim for the first half of the reveal and appear animations
        Phase::Appearing | Phase::Coloring if snapshot.progress < 0.5 => {
            Style::default().fg(Color::DarkGray)
        }
        _ => Style::default().fg(Color::White),
    };

    for (i, &cell) in cells.iter().enumerate() {
        let letter = snapshot.current_guess.get(i).copied();
        let popping = letter.is_some() && snapshot.letter_progress[i] < 1.0;
        let style = if popping {
            border.add_modifier(Modifier::BOLD).fg(Color::Cyan)
        } else {
            border
        };

        if letter.is_none() && i == snapshot.current_guess.len() && snapshot.cursor_visible {
            render_tile(f, cell, Some(b'_'), None, style);
        } else {
            render_tile(f, cell, letter, None, style);
        }
    }
}

fn render_message(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (text, color) = match snapshot.phase {
        Phase::InvalidWord => ("Not in word list".to_string(), Color::Red),
        Phase::Won => (
            format!(
                "Solved in {} of {MAX_ATTEMPTS}! Shift+R for a new game",
                snapshot.attempts.len()
            ),
            Color::Green,
        ),
        Phase::Lost => (
            format!(
                "The word was {}. Shift+R for a new game",
                snapshot.target.map(ToString::to_string).unwrap_or_default()
            ),
            Color::Red,
        ),
        Phase::Playing | Phase::Coloring | Phase::Appearing => (String::new(), Color::White),
    };

    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(message, area);
}

fn render_keyboard(
    f: &mut Frame,
    keyboard: &crate::core::KeyboardState,
    hovered: Option<u8>,
    frame_area: Rect,
) {
    for (key, area) in key_areas(frame_area) {
        let fill = keyboard.get(key).map(class_color);
        let mut border = Style::default().fg(Color::Gray);
        if hovered == Some(key) {
            border = border.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        render_tile(f, area, Some(key), fill, border);
    }
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Type letters | Enter: Submit | Backspace: Delete | Shift+R: Restart | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
