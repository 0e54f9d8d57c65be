//! # quarto-engine
//!
//! A rules engine for a Quarto-style board game on an N x N grid
//! (default 6x6), with an optional toroidal topology where coordinates
//! wrap around the edges.
//!
//! Two players share a pool of 16 pieces; each piece is a 4-bit
//! attribute vector (massive/hollow, large/small, round/cubic,
//! white/black). One player selects a piece, the *other* player places
//! it. A placement wins when it completes a line of four pieces - row,
//! column, or either diagonal - that share at least one attribute.
//!
//! ## Design Principles
//!
//! 1. **Owned sessions**: a `GameSession` is a plain value that owns
//!    its board and bag. No globals; independent games are independent
//!    values.
//!
//! 2. **Single-sourced pieces**: board cells store piece values that
//!    index the bag's fixed table, so attributes and used-state are
//!    never duplicated.
//!
//! 3. **Rejected intents mutate nothing**: every select/place/render
//!    error is recoverable and leaves the session in its pre-call
//!    state.
//!
//! ## Modules
//!
//! - `core`: pieces, the bag, players, configuration, errors
//! - `board`: the occupancy grid, topology, and textual rendering
//! - `rules`: the four-direction AND-mask win scanner
//! - `session`: the select/place turn protocol
//!
//! ## Example
//!
//! ```
//! use quarto_engine::{GameSession, PlacementOutcome, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::new().with_torus(true));
//!
//! // Pieces 8..=11 all share the "white" attribute.
//! session.select(8).unwrap();
//! session.place(0, 0).unwrap();
//! session.select(9).unwrap();
//! session.place(1, 0).unwrap();
//! session.select(10).unwrap();
//! session.place(2, 0).unwrap();
//! session.select(11).unwrap();
//!
//! // Torus topology: x = -3 wraps to column 3, completing the line.
//! let outcome = session.place(-3, 0).unwrap();
//! assert!(matches!(outcome, PlacementOutcome::Win(_)));
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Attribute, Piece, PieceBag, PieceValue, PlayerId, SessionConfig, DEFAULT_BOARD_SIZE,
};

pub use crate::core::{PlaceError, RenderError, SelectError};

pub use crate::board::Board;

pub use crate::rules::{winning_move, Direction};

pub use crate::session::{GameSession, MoveRecord, PlacementOutcome, SessionPhase, SessionResult};
