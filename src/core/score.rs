//! Guess scoring
//!
//! A score is a pair of counts:
//! - exact: same color in the same position
//! - color-only: right color, wrong position, with no slot used twice
//!
//! Color-only matches use multiset intersection: for every distinct color in
//! the guess, take the smaller of its counts in secret and guess, sum those,
//! then subtract the exact matches.

use super::error::{GameError, Result};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Result of scoring one guess against the secret
///
/// Invariant: `exact + color_only <= length` of the scored sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreResult {
    pub exact: usize,
    pub color_only: usize,
}

impl ScoreResult {
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Whether every position matched for a code of `length`
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Positions that matched neither way
    #[inline]
    #[must_use]
    pub const fn misses(self, length: usize) -> usize {
        length.saturating_sub(self.exact + self.color_only)
    }
}

/// Score `guess` against `secret`
///
/// # Errors
/// Returns `LengthMismatch` if the sequences differ in length.
///
/// # Examples
/// ```
/// use mastermind::core::{score, ScoreResult};
///
/// let result = score(&["A", "A", "B", "B"], &["A", "A", "A", "A"]).unwrap();
/// assert_eq!(result, ScoreResult::new(2, 0));
///
/// let result = score(&["A", "B", "C", "D"], &["A", "C", "B", "X"]).unwrap();
/// assert_eq!(result, ScoreResult::new(1, 2));
/// ```
pub fn score<T: Eq + Hash>(secret: &[T], guess: &[T]) -> Result<ScoreResult> {
    if secret.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let exact = secret.iter().zip(guess).filter(|(s, g)| s == g).count();

    let secret_counts = counts(secret);
    let total: usize = counts(guess)
        .into_iter()
        .map(|(color, in_guess)| in_guess.min(secret_counts.get(color).copied().unwrap_or(0)))
        .sum();

    Ok(ScoreResult {
        exact,
        color_only: total - exact,
    })
}

fn counts<T: Eq + Hash>(items: &[T]) -> FxHashMap<&T, usize> {
    let mut counts = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}
