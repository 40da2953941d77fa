//! Cards: fixed-size symbol sets with a square display layout.
//!
//! A card is a set of unique symbols. In a generated deck every pair of
//! distinct cards shares exactly one symbol - that invariant comes from the
//! construction in `deck::generator`, not from anything `Card` enforces.
//!
//! For display and coordinate lookup, a card lays its symbols out sorted
//! ascending, row-major, on the smallest square grid that fits them;
//! trailing cells stay empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coordinate::Coordinate;
use super::symbol::SymbolId;

/// A game card: a sorted set of unique symbols.
///
/// Symbols are stored inline for the common difficulty range (up to 8
/// symbols per card) and spill to the heap for the larger deck sizes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Sorted ascending, no duplicates.
    symbols: SmallVec<[SymbolId; 8]>,
}

impl Card {
    /// Create a card from any collection of symbols.
    ///
    /// Input order does not matter; duplicates are dropped.
    #[must_use]
    pub fn from_symbols(symbols: impl IntoIterator<Item = SymbolId>) -> Self {
        let mut symbols: SmallVec<[SymbolId; 8]> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// Number of symbols on the card.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// The card's symbols, sorted ascending.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    /// Check whether the card carries a symbol.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    /// Find the symbol shared with another card.
    ///
    /// In a valid deck every pair of distinct cards shares exactly one
    /// symbol; this returns the first common one found (arbitrary cards may
    /// share none, hence the `Option`).
    #[must_use]
    pub fn matching_symbol(&self, other: &Card) -> Option<SymbolId> {
        // Both sides are sorted, so a single merge pass suffices.
        let (mut i, mut j) = (0, 0);
        while i < self.symbols.len() && j < other.symbols.len() {
            match self.symbols[i].cmp(&other.symbols[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => return Some(self.symbols[i]),
            }
        }
        None
    }

    /// Side length of the card's square display grid.
    ///
    /// The smallest integer whose square fits every symbol.
    #[must_use]
    pub fn grid_side(&self) -> usize {
        let mut side = 0;
        while side * side < self.symbols.len() {
            side += 1;
        }
        side
    }

    /// Lay the symbols out on the display grid.
    ///
    /// Symbols fill row-major in ascending order; trailing cells are `None`.
    #[must_use]
    pub fn symbol_grid(&self) -> Vec<Vec<Option<SymbolId>>> {
        let side = self.grid_side();
        (0..side)
            .map(|row| {
                (0..side)
                    .map(|col| self.symbols.get(row * side + col).copied())
                    .collect()
            })
            .collect()
    }

    /// Look up the symbol at a grid coordinate.
    ///
    /// Returns `None` for cells outside the grid or past the last symbol.
    #[must_use]
    pub fn symbol_at(&self, coordinate: Coordinate) -> Option<SymbolId> {
        let side = self.grid_side();
        if coordinate.col >= side || coordinate.row >= side {
            return None;
        }
        self.symbols.get(coordinate.row * side + coordinate.col).copied()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card(")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol.raw())?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(raw: &[u16]) -> Card {
        Card::from_symbols(raw.iter().map(|&s| SymbolId::new(s)))
    }

    #[test]
    fn test_from_symbols_sorts_and_dedups() {
        let c = card(&[5, 1, 3, 1]);
        assert_eq!(c.symbol_count(), 3);
        assert_eq!(
            c.symbols(),
            &[SymbolId::new(1), SymbolId::new(3), SymbolId::new(5)]
        );
    }

    #[test]
    fn test_contains() {
        let c = card(&[2, 4, 6]);
        assert!(c.contains(SymbolId::new(4)));
        assert!(!c.contains(SymbolId::new(5)));
    }

    #[test]
    fn test_matching_symbol() {
        let a = card(&[0, 1, 2]);
        let b = card(&[2, 3, 4]);
        assert_eq!(a.matching_symbol(&b), Some(SymbolId::new(2)));
        assert_eq!(b.matching_symbol(&a), Some(SymbolId::new(2)));

        let c = card(&[7, 8, 9]);
        assert_eq!(a.matching_symbol(&c), None);
    }

    #[test]
    fn test_grid_side() {
        assert_eq!(card(&[]).grid_side(), 0);
        assert_eq!(card(&[1]).grid_side(), 1);
        assert_eq!(card(&[1, 2, 3]).grid_side(), 2);
        assert_eq!(card(&[1, 2, 3, 4]).grid_side(), 2);
        assert_eq!(card(&[1, 2, 3, 4, 5]).grid_side(), 3);
        assert_eq!(card(&[1, 2, 3, 4, 5, 6, 7, 8]).grid_side(), 3);
    }

    #[test]
    fn test_symbol_grid_layout() {
        // 3 symbols on a 2x2 grid: one trailing empty cell.
        let c = card(&[10, 20, 30]);
        let grid = c.symbol_grid();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec![Some(SymbolId::new(10)), Some(SymbolId::new(20))]);
        assert_eq!(grid[1], vec![Some(SymbolId::new(30)), None]);
    }

    #[test]
    fn test_symbol_at() {
        let c = card(&[10, 20, 30]);
        assert_eq!(c.symbol_at(Coordinate::new(0, 0)), Some(SymbolId::new(10)));
        assert_eq!(c.symbol_at(Coordinate::new(1, 0)), Some(SymbolId::new(20)));
        assert_eq!(c.symbol_at(Coordinate::new(0, 1)), Some(SymbolId::new(30)));
        // Trailing empty cell.
        assert_eq!(c.symbol_at(Coordinate::new(1, 1)), None);
        // Off the grid entirely.
        assert_eq!(c.symbol_at(Coordinate::new(2, 0)), None);
        assert_eq!(c.symbol_at(Coordinate::new(0, 2)), None);
    }

    #[test]
    fn test_symbol_at_matches_grid() {
        let c = card(&[0, 3, 7, 9, 12, 15, 21]);
        let grid = c.symbol_grid();
        for (row, cells) in grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                assert_eq!(c.symbol_at(Coordinate::new(col, row)), cell);
            }
        }
    }

    #[test]
    fn test_display() {
        let c = card(&[3, 1, 2]);
        assert_eq!(format!("{}", c), "Card(1, 2, 3)");
    }

    #[test]
    fn test_serde_round_trip() {
        let c = card(&[1, 4, 9]);
        let json = serde_json::to_string(&c).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
