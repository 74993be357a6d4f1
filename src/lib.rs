//! Wordle Game
//!
//! A Wordle game engine: letter scoring with correct duplicate-letter
//! handling, a keyboard heat-map, and a timed phase state machine that a
//! frame loop drives, with TUI and line-oriented front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameConfig, GameSession, InputEvent, Phase};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_text("abide\ncrane").unwrap();
//! let target = Word::new("abide").unwrap();
//! let mut session = GameSession::with_target(&dictionary, GameConfig::default(), target);
//!
//! for ch in "abide".chars() {
//!     session.handle_event(InputEvent::Letter(ch));
//! }
//! session.handle_event(InputEvent::Submit);
//! assert_eq!(session.phase(), Phase::Coloring);
//!
//! // The frame loop supplies elapsed seconds
//! session.tick(2.0);
//! assert_eq!(session.phase(), Phase::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine and animation clock
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
