//! The piece bag: the fixed universe of 16 pieces.
//!
//! The bag is a value-indexed table - piece `v` lives at slot `v` - so a
//! cell that stores a [`PieceValue`] and the bag entry it names always
//! agree on attributes and used-state. The bag never grows or shrinks;
//! only the `used` flags change.

use serde::{Deserialize, Serialize};

use super::error::SelectError;
use super::piece::{Piece, PieceValue};

/// The shared pool of all 16 pieces.
///
/// ## Example
///
/// ```
/// use quarto_engine::core::{PieceBag, PieceValue};
///
/// let mut bag = PieceBag::new();
/// assert_eq!(bag.available().count(), 16);
///
/// bag.mark_used(PieceValue::new(3));
/// assert_eq!(bag.available().count(), 15);
/// assert!(bag.available().all(|v| v != PieceValue::new(3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceBag {
    pieces: [Piece; PieceValue::COUNT],
}

impl PieceBag {
    /// Create a bag with all 16 pieces unused.
    #[must_use]
    pub fn new() -> Self {
        let mut pieces = [Piece::new(PieceValue::new(0)); PieceValue::COUNT];
        for value in PieceValue::all() {
            pieces[value.index()] = Piece::new(value);
        }
        Self { pieces }
    }

    /// Recreate all 16 pieces with `used = false`.
    ///
    /// Any outstanding selection referring to the old flags is stale;
    /// callers must reset board state in lockstep.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Resolve a raw piece number, rejecting values outside 0..=15.
    pub fn by_value(&self, value: i32) -> Result<PieceValue, SelectError> {
        if !(0..=i32::from(PieceValue::MAX)).contains(&value) {
            return Err(SelectError::InvalidPieceValue(value));
        }
        Ok(PieceValue::new(value as u8))
    }

    /// Get the piece with the given value.
    #[must_use]
    pub fn get(&self, value: PieceValue) -> &Piece {
        &self.pieces[value.index()]
    }

    /// Mark a piece as used.
    pub fn mark_used(&mut self, value: PieceValue) {
        self.pieces[value.index()].set_used(true);
    }

    /// Iterate over the values of unused pieces in ascending order.
    ///
    /// The sequence is recomputed on every call, never cached.
    pub fn available(&self) -> impl Iterator<Item = PieceValue> + '_ {
        self.pieces
            .iter()
            .filter(|piece| !piece.is_used())
            .map(|piece| piece.value())
    }

    /// Number of unused pieces.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available().count()
    }

    /// Whether any piece is still unused.
    #[must_use]
    pub fn has_available(&self) -> bool {
        self.pieces.iter().any(|piece| !piece.is_used())
    }

    /// Total number of pieces, used or not. Always 16.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// The bag is never empty of pieces (only of *available* pieces).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over all 16 pieces in value order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_bag_has_all_pieces_available() {
        let bag = PieceBag::new();

        assert_eq!(bag.len(), 16);
        assert_eq!(bag.available_count(), 16);

        let values: Vec<_> = bag.available().collect();
        let expected: Vec<_> = PieceValue::all().collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_mark_used_filters_available() {
        let mut bag = PieceBag::new();

        bag.mark_used(PieceValue::new(0));
        bag.mark_used(PieceValue::new(15));

        assert_eq!(bag.available_count(), 14);
        assert!(bag.get(PieceValue::new(0)).is_used());
        assert!(bag.get(PieceValue::new(15)).is_used());
        assert!(!bag.get(PieceValue::new(7)).is_used());
    }

    #[test]
    fn test_available_stays_ascending() {
        let mut bag = PieceBag::new();

        bag.mark_used(PieceValue::new(4));
        bag.mark_used(PieceValue::new(9));

        let values: Vec<_> = bag.available().collect();
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(values, sorted);
        assert_eq!(values.len(), 14);
    }

    #[test]
    fn test_available_is_restartable() {
        let mut bag = PieceBag::new();
        bag.mark_used(PieceValue::new(1));

        let first: Vec<_> = bag.available().collect();
        let second: Vec<_> = bag.available().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_by_value_range() {
        let bag = PieceBag::new();

        assert_eq!(bag.by_value(0), Ok(PieceValue::new(0)));
        assert_eq!(bag.by_value(15), Ok(PieceValue::new(15)));
        assert_eq!(bag.by_value(16), Err(SelectError::InvalidPieceValue(16)));
        assert_eq!(bag.by_value(-1), Err(SelectError::InvalidPieceValue(-1)));
        assert_eq!(
            bag.by_value(1000),
            Err(SelectError::InvalidPieceValue(1000))
        );
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut bag = PieceBag::new();
        for value in PieceValue::all() {
            bag.mark_used(value);
        }
        assert!(!bag.has_available());

        bag.reset();

        assert_eq!(bag.available_count(), 16);
        assert!(bag.has_available());
    }

    #[test]
    fn test_exhausting_the_bag() {
        let mut bag = PieceBag::new();
        for value in PieceValue::all() {
            bag.mark_used(value);
        }

        assert_eq!(bag.available_count(), 0);
        assert_eq!(bag.available().next(), None);
        // The bag itself never shrinks.
        assert_eq!(bag.len(), 16);
        assert!(!bag.is_empty());
    }

    #[test]
    fn test_serialization() {
        let mut bag = PieceBag::new();
        bag.mark_used(PieceValue::new(5));

        let json = serde_json::to_string(&bag).unwrap();
        let deserialized: PieceBag = serde_json::from_str(&json).unwrap();
        assert_eq!(bag, deserialized);
    }
}
