//! Terminal output formatting
//!
//! Display utilities for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_game_over, print_outcome, print_palette, print_score_result,
    print_statistics,
};
