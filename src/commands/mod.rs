//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreReport, score_codes};
pub use simple::{parse_guess, play_lines, run_simple};
