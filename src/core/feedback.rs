//! Feedback peg tally
//!
//! Turns a [`ScoreResult`] into one marker per slot for rendering. The order
//! is a tally (exact first, then color-only, then misses), not a per-slot map.

use super::error::{GameError, Result};
use super::score::ScoreResult;

/// One feedback marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    /// Right color, right position
    Exact,
    /// Right color, wrong position
    ColorOnly,
    /// No match
    None,
}

/// Ordered feedback markers, one per code slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackSequence(Vec<Peg>);

impl FeedbackSequence {
    /// Build the tally for a score on a code of `length`
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the score does not fit in `length` slots.
    pub fn from_score(result: ScoreResult, length: usize) -> Result<Self> {
        format_feedback(result.exact, result.color_only, length)
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of markers of the given kind
    #[must_use]
    pub fn count(&self, kind: Peg) -> usize {
        self.0.iter().filter(|&&p| p == kind).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Peg> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FeedbackSequence {
    type Item = &'a Peg;
    type IntoIter = std::slice::Iter<'a, Peg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Produce `exact` Exact pegs, then `color_only` `ColorOnly` pegs, then None
/// pegs up to `length`
///
/// # Errors
/// Returns `InvalidArgument` if `exact + color_only > length`.
///
/// # Examples
/// ```
/// use mastermind::core::{format_feedback, Peg};
///
/// let feedback = format_feedback(2, 1, 4).unwrap();
/// assert_eq!(feedback.pegs(), &[Peg::Exact, Peg::Exact, Peg::ColorOnly, Peg::None]);
/// ```
pub fn format_feedback(
    exact: usize,
    color_only: usize,
    length: usize,
) -> Result<FeedbackSequence> {
    let matched = exact
        .checked_add(color_only)
        .filter(|&sum| sum <= length)
        .ok_or_else(|| {
            GameError::invalid(format!(
                "{exact} exact + {color_only} color matches exceed code length {length}"
            ))
        })?;

    let mut pegs = Vec::with_capacity(length);
    pegs.extend(std::iter::repeat_n(Peg::Exact, exact));
    pegs.extend(std::iter::repeat_n(Peg::ColorOnly, color_only));
    pegs.extend(std::iter::repeat_n(Peg::None, length - matched));

    Ok(FeedbackSequence(pegs))
}
