//! Symbol-to-glyph mapping for presentation glue.
//!
//! The core plays entirely on integer symbols; a UI wants something nicer
//! to look at. `EmojiMap` turns a code-point table (lines of hex like
//! `1F600..1F64F` or `2764`) into a glyph per symbol. Shuffling the table
//! with an injected [`ShuffleRng`] gives every match a fresh look without
//! touching the core's symbol identifiers.

use rustc_hash::FxHashSet;

use crate::core::{ShuffleRng, SymbolId};

/// Built-in code-point table: common pictographic blocks.
const DEFAULT_CODE_POINTS: &str = "\
1F300..1F320
1F330..1F37F
1F380..1F3CA
1F3E0..1F3F0
1F400..1F4FC
1F500..1F53D
1F550..1F567
1F5FB..1F5FF
1F600..1F64F
1F680..1F6C5
2600..2653
2660..2763
";

/// Maps symbol identifiers to display glyphs.
///
/// Lookup wraps modulo the table size, so any table works for any deck;
/// a table at least as large as the deck's symbol count keeps glyphs
/// unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiMap {
    glyphs: Vec<char>,
}

impl EmojiMap {
    /// Build a map from hex code-point lines.
    ///
    /// Each non-empty line is either a single code point (`2764`) or an
    /// inclusive range (`1F600..1F64F`). Lines that don't parse and code
    /// points that aren't valid characters are skipped; duplicates keep
    /// their first position.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        let mut seen = FxHashSet::default();
        let mut glyphs = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some(range) = parse_code_point_line(line) else {
                continue;
            };
            for code_point in range {
                if let Some(glyph) = char::from_u32(code_point) {
                    if seen.insert(glyph) {
                        glyphs.push(glyph);
                    }
                }
            }
        }

        Self { glyphs }
    }

    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_lines(DEFAULT_CODE_POINTS)
    }

    /// Shuffle the table with an injected RNG.
    #[must_use]
    pub fn shuffled(mut self, rng: &mut ShuffleRng) -> Self {
        rng.shuffle(&mut self.glyphs);
        self
    }

    /// Number of glyphs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyph for a symbol, wrapping modulo the table size.
    ///
    /// `None` only for an empty table.
    #[must_use]
    pub fn glyph(&self, symbol: SymbolId) -> Option<char> {
        if self.glyphs.is_empty() {
            None
        } else {
            Some(self.glyphs[symbol.index() % self.glyphs.len()])
        }
    }
}

/// Parse one table line into an inclusive code-point range.
fn parse_code_point_line(line: &str) -> Option<std::ops::RangeInclusive<u32>> {
    if let Some((start, end)) = line.split_once("..") {
        let start = u32::from_str_radix(start, 16).ok()?;
        let end = u32::from_str_radix(end, 16).ok()?;
        if start > end {
            return None;
        }
        Some(start..=end)
    } else {
        let code_point = u32::from_str_radix(line, 16).ok()?;
        Some(code_point..=code_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_code_point() {
        let map = EmojiMap::from_lines("2764");
        assert_eq!(map.len(), 1);
        assert_eq!(map.glyph(SymbolId::new(0)), Some('\u{2764}'));
    }

    #[test]
    fn test_parse_range() {
        let map = EmojiMap::from_lines("1F600..1F603");
        assert_eq!(map.len(), 4);
        assert_eq!(map.glyph(SymbolId::new(0)), Some('\u{1F600}'));
        assert_eq!(map.glyph(SymbolId::new(3)), Some('\u{1F603}'));
    }

    #[test]
    fn test_lookup_wraps_modulo() {
        let map = EmojiMap::from_lines("1F600..1F601");
        assert_eq!(map.glyph(SymbolId::new(0)), map.glyph(SymbolId::new(2)));
        assert_eq!(map.glyph(SymbolId::new(1)), map.glyph(SymbolId::new(3)));
    }

    #[test]
    fn test_skips_bad_lines_and_duplicates() {
        let map = EmojiMap::from_lines("xyz\n1F600..1F601\n\n1F600\nFFFF..0000");
        // Bad hex, the duplicate 1F600, and the inverted range all drop out.
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_skips_invalid_code_points() {
        // D800..DFFF are surrogates, not valid chars.
        let map = EmojiMap::from_lines("D7FF..E000");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_empty_map() {
        let map = EmojiMap::from_lines("");
        assert!(map.is_empty());
        assert_eq!(map.glyph(SymbolId::new(0)), None);
    }

    #[test]
    fn test_builtin_is_substantial() {
        let map = EmojiMap::builtin();
        assert!(map.len() > 500);
    }

    #[test]
    fn test_shuffled_is_deterministic_permutation() {
        let base = EmojiMap::builtin();

        let mut rng1 = ShuffleRng::new(42);
        let mut rng2 = ShuffleRng::new(42);
        let a = base.clone().shuffled(&mut rng1);
        let b = base.clone().shuffled(&mut rng2);

        assert_eq!(a, b);
        assert_ne!(a, base);
        assert_eq!(a.len(), base.len());
    }
}
