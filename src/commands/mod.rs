//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_word};
pub use simple::run_simple;
