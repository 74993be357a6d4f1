//! Terminal output formatting
//!
//! Display utilities for the line-oriented front end and the `score` command.

pub mod formatters;

pub use formatters::{colored_attempt, colored_keyboard, score_line};
