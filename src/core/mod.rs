//! Core engine types: pieces, the bag, players, configuration, errors.
//!
//! This module contains the leaf building blocks the board and session
//! are assembled from. Nothing here knows about grids or turn order.

pub mod bag;
pub mod config;
pub mod error;
pub mod piece;
pub mod player;

pub use bag::PieceBag;
pub use config::{SessionConfig, DEFAULT_BOARD_SIZE};
pub use error::{PlaceError, RenderError, SelectError};
pub use piece::{Attribute, Piece, PieceValue};
pub use player::PlayerId;
