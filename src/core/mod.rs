//! Core domain types for Mastermind
//!
//! Pure functions and value types: code generation, guess scoring and the
//! feedback tally. Nothing here performs I/O or holds game state.

mod code;
mod color;
mod error;
mod feedback;
mod score;

pub use code::{Code, generate};
pub use color::{Color, Palette};
pub use error::{GameError, Result};
pub use feedback::{FeedbackSequence, Peg, format_feedback};
pub use score::{ScoreResult, score};
