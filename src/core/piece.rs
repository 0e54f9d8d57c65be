//! Piece representation: 4-bit attribute vectors.
//!
//! Every piece is identified by a 4-bit value; each bit is one binary
//! attribute:
//!
//! - bit 0: massive (set) / hollow (clear)
//! - bit 1: large (set) / small (clear)
//! - bit 2: round (set) / cubic (clear)
//! - bit 3: white (set) / black (clear)
//!
//! The value IS the identity: there are exactly 16 distinct pieces,
//! one per value 0..=15. Construction masks to the low nibble rather
//! than rejecting wider values - the 4-bit range is a domain invariant
//! enforced at every construction point.

use serde::{Deserialize, Serialize};

/// One of the four binary piece attributes.
///
/// Each attribute corresponds to one bit of a [`PieceValue`]. A set bit
/// means the "positive" reading (massive, large, round, white); a clear
/// bit means the opposite (hollow, small, cubic, black).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// bit 0: massive vs hollow.
    Massive,
    /// bit 1: large vs small.
    Large,
    /// bit 2: round vs cubic.
    Round,
    /// bit 3: white vs black.
    White,
}

impl Attribute {
    /// All four attributes, in bit order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Massive,
        Attribute::Large,
        Attribute::Round,
        Attribute::White,
    ];

    /// The bit mask for this attribute.
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Attribute::Massive => 0x01,
            Attribute::Large => 0x02,
            Attribute::Round => 0x04,
            Attribute::White => 0x08,
        }
    }
}

/// A piece's 4-bit value - its identity and its attribute vector at once.
///
/// ## Example
///
/// ```
/// use quarto_engine::core::{Attribute, PieceValue};
///
/// let piece = PieceValue::new(0b1010);
/// assert!(piece.is_white());
/// assert!(piece.is_large());
/// assert!(!piece.is_round());
/// assert!(!piece.is_massive());
/// assert!(piece.has(Attribute::White));
///
/// // Wider values clamp to the low nibble.
/// assert_eq!(PieceValue::new(0xF3).raw(), 0x03);
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PieceValue(u8);

impl PieceValue {
    /// Number of distinct pieces.
    pub const COUNT: usize = 16;

    /// Largest valid raw value.
    pub const MAX: u8 = 0x0f;

    /// Create a piece value, masking to the low 4 bits.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw & Self::MAX)
    }

    /// Get the raw 4-bit value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the value as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 16 piece values in ascending order.
    ///
    /// ```
    /// use quarto_engine::core::PieceValue;
    ///
    /// let values: Vec<_> = PieceValue::all().collect();
    /// assert_eq!(values.len(), 16);
    /// assert_eq!(values[0], PieceValue::new(0));
    /// assert_eq!(values[15], PieceValue::new(15));
    /// ```
    pub fn all() -> impl Iterator<Item = PieceValue> {
        (0..=Self::MAX).map(PieceValue)
    }

    /// Check whether an attribute bit is set.
    #[must_use]
    pub const fn has(self, attribute: Attribute) -> bool {
        self.0 & attribute.mask() != 0
    }

    /// Whether the piece is white (bit 3 set).
    #[must_use]
    pub const fn is_white(self) -> bool {
        self.has(Attribute::White)
    }

    /// Whether the piece is round (bit 2 set).
    #[must_use]
    pub const fn is_round(self) -> bool {
        self.has(Attribute::Round)
    }

    /// Whether the piece is large (bit 1 set).
    #[must_use]
    pub const fn is_large(self) -> bool {
        self.has(Attribute::Large)
    }

    /// Whether the piece is massive (bit 0 set).
    #[must_use]
    pub const fn is_massive(self) -> bool {
        self.has(Attribute::Massive)
    }
}

impl std::fmt::Display for PieceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece in a game: its value plus the mutable `used` flag.
///
/// `used` becomes true the moment the piece is selected (not when it is
/// placed) and never reverts except on a full reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    value: PieceValue,
    used: bool,
}

impl Piece {
    /// Create an unused piece with the given value.
    #[must_use]
    pub const fn new(value: PieceValue) -> Self {
        Self {
            value,
            used: false,
        }
    }

    /// Get the piece's value.
    #[must_use]
    pub const fn value(self) -> PieceValue {
        self.value
    }

    /// Whether the piece has been used.
    #[must_use]
    pub const fn is_used(self) -> bool {
        self.used
    }

    /// Set the used flag.
    pub fn set_used(&mut self, used: bool) {
        self.used = used;
    }
}
