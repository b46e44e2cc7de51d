//! Secret code generation
//!
//! Codes are drawn uniformly from the palette, one position at a time, with
//! replacement. Duplicated colors are expected.

use super::color::{Color, Palette};
use super::error::{GameError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Draw `length` independent uniform picks from `palette`
///
/// # Errors
/// Returns `InvalidArgument` if `length` is zero or `palette` is empty.
///
/// # Examples
/// ```
/// use mastermind::core::generate;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate(&["A", "B", "C"], 4, &mut rng).unwrap();
/// assert_eq!(code.len(), 4);
/// assert!(code.iter().all(|c| ["A", "B", "C"].contains(c)));
/// ```
pub fn generate<T, R>(palette: &[T], length: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if length < 1 {
        return Err(GameError::invalid("code length must be at least 1"));
    }

    (0..length)
        .map(|_| {
            palette
                .choose(rng)
                .cloned()
                .ok_or_else(|| GameError::invalid("palette must contain at least one color"))
        })
        .collect()
}

/// A secret code: an ordered sequence of palette colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<Color>);

impl Code {
    /// Wrap an existing color sequence
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Generate a random code of `length` colors from `palette`
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `length` is zero.
    pub fn random<R: Rng + ?Sized>(
        palette: &Palette,
        length: usize,
        rng: &mut R,
    ) -> Result<Self> {
        generate(palette.colors(), length, rng).map(Self)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
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
}

impl AsRef<[Color]> for Code {
    fn as_ref(&self) -> &[Color] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
