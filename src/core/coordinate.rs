//! Grid-cell coordinates for picking a symbol off the live card.
//!
//! Players call out a cell like `"B2"`: a column letter followed by a
//! 1-based row number. Parsing is forgiving on case (`"b2"` works) but a
//! malformed coordinate is never an error - it simply resolves to `None`,
//! so the UI layer can re-prompt.

use serde::{Deserialize, Serialize};

/// A parsed grid-cell label.
///
/// Both fields are 0-based indices into the live card's display grid.
/// Bounds against an actual grid are checked at lookup time, not parse
/// time - `"Z99"` parses fine and then misses every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column index (0-based, from the letter: A = 0).
    pub col: usize,
    /// Row index (0-based, from the number: 1 = 0).
    pub row: usize,
}

impl Coordinate {
    /// Create a coordinate from 0-based column and row indices.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Parse a textual coordinate like `"B2"` or `"a10"`.
    ///
    /// Returns `None` unless the input is one ASCII letter followed by one
    /// or more digits naming a row of at least 1.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let mut chars = text.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_alphabetic() {
            return None;
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row_number: usize = digits.parse().ok()?;
        if row_number == 0 {
            return None;
        }

        Some(Self {
            col: (letter.to_ascii_uppercase() as u8 - b'A') as usize,
            row: row_number - 1,
        })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Columns past 'Z' never occur in practice (grids top out at 8x8).
        let letter = (b'A' + (self.col % 26) as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(Coordinate::parse("A1"), Some(Coordinate::new(0, 0)));
        assert_eq!(Coordinate::parse("B2"), Some(Coordinate::new(1, 1)));
        assert_eq!(Coordinate::parse("C3"), Some(Coordinate::new(2, 2)));
    }

    #[test]
    fn test_parse_lowercase() {
        assert_eq!(Coordinate::parse("b2"), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_parse_multi_digit_row() {
        assert_eq!(Coordinate::parse("A10"), Some(Coordinate::new(0, 9)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Coordinate::parse(" B2 "), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Coordinate::parse(""), None);
        assert_eq!(Coordinate::parse("A"), None);
        assert_eq!(Coordinate::parse("1A"), None);
        assert_eq!(Coordinate::parse("22"), None);
        assert_eq!(Coordinate::parse("A0"), None);
        assert_eq!(Coordinate::parse("AB2"), None);
        assert_eq!(Coordinate::parse("B-1"), None);
        assert_eq!(Coordinate::parse("ω2"), None);
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["A1", "B2", "H8", "C12"] {
            let coord = Coordinate::parse(text).unwrap();
            assert_eq!(format!("{}", coord), text);
        }
    }

    #[test]
    fn test_from_str() {
        let coord: Coordinate = "D4".parse().unwrap();
        assert_eq!(coord, Coordinate::new(3, 3));
        assert!("??".parse::<Coordinate>().is_err());
    }
}
