//! Game configuration
//!
//! Palette, code length and attempt limit. A `GameConfig` is validated on
//! construction, so a session built from one cannot be misconfigured.

use crate::core::{GameError, Palette, Result};

/// Default number of colors in a code
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Default number of guesses before the game is lost
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    palette: Palette,
    code_length: usize,
    max_attempts: usize,
}

impl GameConfig {
    /// # Errors
    /// Returns `InvalidArgument` if `code_length` or `max_attempts` is zero.
    pub fn new(palette: Palette, code_length: usize, max_attempts: usize) -> Result<Self> {
        if code_length < 1 {
            return Err(GameError::invalid("code length must be at least 1"));
        }
        if max_attempts < 1 {
            return Err(GameError::invalid("max attempts must be at least 1"));
        }

        Ok(Self {
            palette,
            code_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Palette::classic(),
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.palette().len(), 6);
        assert_eq!(config.code_length(), 4);
        assert_eq!(config.max_attempts(), 10);
    }

    #[test]
    fn zero_length_rejected() {
        assert!(matches!(
            GameConfig::new(Palette::classic(), 0, 10),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(matches!(
            GameConfig::new(Palette::classic(), 4, 0),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn custom_values_kept() {
        let config = GameConfig::new(Palette::classic(), 5, 12).unwrap();
        assert_eq!(config.code_length(), 5);
        assert_eq!(config.max_attempts(), 12);
    }
}
