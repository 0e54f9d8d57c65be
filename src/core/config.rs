//! Session configuration.
//!
//! A game is configured at construction time: board size and topology.
//! Both are fixed for the lifetime of the session.

use serde::{Deserialize, Serialize};

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Configuration for a game session.
///
/// ## Example
///
/// ```
/// use quarto_engine::core::SessionConfig;
///
/// let config = SessionConfig::new().with_size(8).with_torus(true);
/// assert_eq!(config.size, 8);
/// assert!(config.torus);
///
/// // Defaults: 6x6, standard (non-wrapping) topology.
/// let default = SessionConfig::default();
/// assert_eq!(default.size, 6);
/// assert!(!default.torus);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board edge length (the board is `size` x `size`).
    pub size: usize,

    /// Whether out-of-range coordinates wrap around the edges.
    pub torus: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            torus: false,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the board topology.
    #[must_use]
    pub fn with_torus(mut self, torus: bool) -> Self {
        self.torus = torus;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.size, DEFAULT_BOARD_SIZE);
        assert!(!config.torus);
    }

    #[test]
    fn test_combinators() {
        let config = SessionConfig::new().with_size(4).with_torus(true);
        assert_eq!(config.size, 4);
        assert!(config.torus);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::new().with_torus(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
