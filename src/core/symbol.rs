//! Symbol identification.
//!
//! Symbols are opaque integer identifiers. For a deck of order `n`
//! (`symbols_per_card - 1`), valid identifiers span `[0, n² + n]`.
//! The core never interprets symbols beyond equality and ordering -
//! presentation glue assigns glyphs via `present::EmojiMap`.

use serde::{Deserialize, Serialize};

/// Symbol identifier.
///
/// A `u16` covers every supported deck: the largest supported order is 59,
/// whose symbol range tops out at `59² + 59 = 3540`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the identifier as a usize, for table indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_id_basics() {
        let s = SymbolId::new(7);
        assert_eq!(s.raw(), 7);
        assert_eq!(s.index(), 7);
        assert_eq!(format!("{}", s), "Symbol(7)");
    }

    #[test]
    fn test_symbol_id_ordering() {
        let mut symbols = vec![SymbolId::new(5), SymbolId::new(1), SymbolId::new(3)];
        symbols.sort();
        assert_eq!(
            symbols,
            vec![SymbolId::new(1), SymbolId::new(3), SymbolId::new(5)]
        );
    }

    #[test]
    fn test_symbol_id_serde() {
        let s = SymbolId::new(42);
        let json = serde_json::to_string(&s).unwrap();
        let back: SymbolId = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
