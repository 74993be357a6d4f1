//! TUI application state and frame loop

use super::rendering::{self, key_at};
use crate::game::{GameSession, InputEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Target frame time (60 FPS)
const FRAME_TIME: Duration = Duration::from_millis(16);

/// What a terminal event asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(InputEvent),
    Quit,
}

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub should_quit: bool,
    /// Terminal area of the last drawn frame, used for mouse hit-testing
    pub area: Rect,
}

impl<'a> App<'a> {
    #[must_use]
    pub const fn new(session: GameSession<'a>) -> Self {
        Self {
            session,
            should_quit: false,
            area: Rect::ZERO,
        }
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        let action = match event {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse),
            _ => None,
        };

        match action {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Game(input)) => {
                self.session.handle_event(input);
            }
            None => {}
        }
    }

    fn map_mouse(&self, mouse: &MouseEvent) -> Option<Action> {
        if !self.session.config().keyboard_enabled {
            return None;
        }

        match mouse.kind {
            MouseEventKind::Moved => {
                let key = key_at(self.area, mouse.column, mouse.row).map(char::from);
                Some(Action::Game(InputEvent::Hover(key)))
            }
            MouseEventKind::Down(_) => key_at(self.area, mouse.column, mouse.row)
                .map(|key| Action::Game(InputEvent::Letter(char::from(key)))),
            _ => None,
        }
    }
}

/// Map a key press to an action
///
/// Shift+R restarts, Enter submits, Esc or Ctrl+C quits; every other character
/// is passed on as a letter and filtered by the session.
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('R') if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Action::Game(InputEvent::Restart)
        }
        KeyCode::Char(c) => Action::Game(InputEvent::Letter(c)),
        KeyCode::Backspace => Action::Game(InputEvent::Backspace),
        KeyCode::Enter => Action::Game(InputEvent::Submit),
        _ => return None,
    };

    Some(action)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let frame = terminal.draw(|f| rendering::ui(f, &app.session.snapshot()))?;
        app.area = frame.area;

        // Wait for input until the next frame is due, then drain the queue in order
        if event::poll(FRAME_TIME.saturating_sub(last_frame.elapsed()))? {
            loop {
                app.handle_event(&event::read()?);
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        if let Some(transition) = app
            .session
            .tick(now.duration_since(last_frame).as_secs_f32())
        {
            log::trace!("{} -> {}", transition.from, transition.to);
        }
        last_frame = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, Phase};
    use crate::wordlists::Dictionary;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn map_key_bindings() {
        let key = |code, modifiers| map_key(&KeyEvent::new(code, modifiers));

        assert_eq!(
            key(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(Action::Game(InputEvent::Letter('a')))
        );
        assert_eq!(
            key(KeyCode::Char('R'), KeyModifiers::SHIFT),
            Some(Action::Game(InputEvent::Restart))
        );
        assert_eq!(
            key(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Game(InputEvent::Submit))
        );
        assert_eq!(
            key(KeyCode::Backspace, KeyModifiers::NONE),
            Some(Action::Game(InputEvent::Backspace))
        );
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Some(Action::Quit));
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Action::Quit));
        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), None);
    }

    #[test]
    fn events_drive_session() {
        let dictionary = Dictionary::from_text("abide\ncrane").unwrap();
        let session =
            GameSession::with_target(&dictionary, GameConfig::default(), Word::new("abide").unwrap());
        let mut app = App::new(session);

        for ch in "abide".chars() {
            app.handle_event(&press(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        app.handle_event(&press(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.session.phase(), Phase::Coloring);

        app.handle_event(&press(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
