//! Color tokens and palettes
//!
//! A [`Color`] is an opaque token compared by equality. It carries a display
//! name and, optionally, an RGB value the presentation layer can render.

use super::error::{GameError, Result};
use std::fmt;
use std::str::FromStr;

/// A single color token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    name: String,
    rgb: Option<(u8, u8, u8)>,
}

impl Color {
    /// Create a color with a name only
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rgb: None,
        }
    }

    /// Create a color with a name and an RGB value
    #[must_use]
    pub fn with_rgb(name: impl Into<String>, rgb: (u8, u8, u8)) -> Self {
        Self {
            name: name.into(),
            rgb: Some(rgb),
        }
    }

    /// Parse a color spec: `Name` or `Name:#rrggbb`
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the name is blank or the hex value is malformed.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// let cyan = Color::parse("Cyan:#38ffff").unwrap();
    /// assert_eq!(cyan.name(), "Cyan");
    /// assert_eq!(cyan.rgb(), Some((0x38, 0xff, 0xff)));
    ///
    /// assert!(Color::parse("Bad:#12").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let (name, hex) = match spec.split_once(':') {
            Some((name, hex)) => (name.trim(), Some(hex.trim())),
            None => (spec.trim(), None),
        };

        if name.is_empty() {
            return Err(GameError::invalid(format!("blank color name in '{spec}'")));
        }

        match hex {
            Some(hex) => Ok(Self::with_rgb(name, parse_hex(hex)?)),
            None => Ok(Self::new(name)),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Option<(u8, u8, u8)> {
        self.rgb
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(GameError::invalid(format!("'{hex}' is not a #rrggbb value")));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| GameError::invalid(format!("'{hex}' is not a #rrggbb value")))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Ordered set of distinct colors a code is drawn from
///
/// Immutable once built. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from an ordered list of colors
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `colors` is empty or two colors share a name.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GameError::invalid("palette must contain at least one color"));
        }

        for (i, color) in colors.iter().enumerate() {
            if colors[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&color.name))
            {
                return Err(GameError::invalid(format!(
                    "duplicate color '{}' in palette",
                    color.name
                )));
            }
        }

        Ok(Self { colors })
    }

    /// The six-color palette of the classic board
    #[must_use]
    pub fn classic() -> Self {
        Self {
            colors: vec![
                Color::with_rgb("Cyan", (0x38, 0xff, 0xff)),
                Color::with_rgb("Orange", (0xff, 0x6a, 0x00)),
                Color::with_rgb("Lime", (0xcc, 0xf3, 0x00)),
                Color::with_rgb("Pink", (0xff, 0x5e, 0x9c)),
                Color::with_rgb("Blue", (0x5a, 0x7a, 0xf5)),
                Color::with_rgb("Violet", (0xb2, 0x77, 0xff)),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Color at a 0-based palette position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Look up a color by name, ignoring ASCII case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Color> {
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Palette position of a color
    #[must_use]
    pub fn position(&self, color: &Color) -> Option<usize> {
        self.colors.iter().position(|c| c == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl FromStr for Palette {
    type Err = GameError;

    /// Parse a comma-separated list of color specs
    fn from_str(s: &str) -> Result<Self> {
        let colors = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Color::parse)
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_palette_has_six_distinct_colors() {
        let palette = Palette::classic();
        assert_eq!(palette.len(), 6);
        assert!(Palette::new(palette.colors().to_vec()).is_ok());
        assert_eq!(palette.get(0).map(Color::name), Some("Cyan"));
        assert_eq!(palette.get(5).map(Color::name), Some("Violet"));
    }

    #[test]
    fn empty_palette_rejected() {
        assert!(matches!(
            Palette::new(vec![]),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Palette::new(vec![Color::new("Red"), Color::new("red")]);
        assert!(matches!(result, Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn single_color_palette_allowed() {
        let palette = Palette::new(vec![Color::new("Red")]).unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn parse_palette_from_list() {
        let palette: Palette = "Red, Green:#00ff00 ,Blue".parse().unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(1).unwrap().rgb(), Some((0, 0xff, 0)));
        assert_eq!(palette.get(2).unwrap().rgb(), None);
    }

    #[test]
    fn parse_hex_without_hash() {
        let color = Color::parse("Cyan:38ffff").unwrap();
        assert_eq!(color.rgb(), Some((0x38, 0xff, 0xff)));
    }

    #[test]
    fn parse_rejects_bad_specs() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse(":#ffffff").is_err());
        assert!(Color::parse("Red:#gg0000").is_err());
        assert!(Color::parse("Red:#ff00").is_err());
        assert!("".parse::<Palette>().is_err());
    }

    #[test]
    fn find_ignores_case() {
        let palette = Palette::classic();
        assert_eq!(palette.find("lime").map(Color::name), Some("Lime"));
        assert_eq!(palette.find(" PINK ").map(Color::name), Some("Pink"));
        assert!(palette.find("Magenta").is_none());
    }

    #[test]
    fn position_and_contains() {
        let palette = Palette::classic();
        let blue = palette.find("Blue").unwrap().clone();
        assert!(palette.contains(&blue));
        assert_eq!(palette.position(&blue), Some(4));
        assert!(!palette.contains(&Color::new("Blue")));
    }
}
