//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary, plus loading of
//! custom lists from plain text files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};
