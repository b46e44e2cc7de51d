//! Formatting utilities for terminal output

use crate::core::{Color, FeedbackSequence, Peg};
use colored::{ColoredString, Colorize};

/// Emoji for a single feedback peg
#[must_use]
pub const fn peg_emoji(peg: Peg) -> char {
    match peg {
        Peg::Exact => '🟢',
        Peg::ColorOnly => '🟡',
        Peg::None => '🔴',
    }
}

/// Format a feedback tally as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &FeedbackSequence) -> String {
    feedback.iter().map(|&peg| peg_emoji(peg)).collect()
}

/// A filled peg in the color's own RGB value, or plain if it has none
#[must_use]
pub fn color_swatch(color: &Color) -> ColoredString {
    let peg = format!("● {}", color.name());
    match color.rgb() {
        Some((r, g, b)) => peg.truecolor(r, g, b).bold(),
        None => peg.bold(),
    }
}

/// Swatches for a sequence of colors, separated by spaces
#[must_use]
pub fn colors_to_swatches(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| color_swatch(c).to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
