//! Player identification.
//!
//! The engine is strictly two-player: player 0 and player 1 alternate
//! placements. A board whose game has not started yet has no current
//! player at all, modeled as `Option<PlayerId>` rather than a sentinel
//! value.

use serde::{Deserialize, Serialize};

/// Type-safe player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
///
/// ```
/// use quarto_engine::core::PlayerId;
///
/// let p0 = PlayerId::new(0);
/// assert_eq!(p0.opponent(), PlayerId::new(1));
/// assert_eq!(p0.opponent().opponent(), p0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player. Flips 1 to 0 and anything else to 1.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self.0 {
            1 => Self(0),
            _ => Self(1),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
