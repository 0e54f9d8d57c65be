//! Error taxonomy for rejected intents.
//!
//! Every error here is recoverable at the boundary: a rejected select,
//! place, or render intent leaves the session in its pre-call state, and
//! the caller receives a descriptive error to relay to the user. The
//! engine never retries; the external driver may re-prompt.

use thiserror::Error;

use super::piece::PieceValue;

/// Errors from selecting a piece for the opponent to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The game has already ended in a win or draw.
    #[error("the game has already been finished")]
    GameFinished,

    /// A piece is already selected and awaiting placement.
    #[error("the selection is currently locked")]
    SelectionLocked,

    /// The requested piece number is outside 0..=15.
    #[error("the piece number must be between 0 and 15, got {0}")]
    InvalidPieceValue(i32),

    /// The requested piece has already been used.
    #[error("piece {0} has already been used")]
    PieceAlreadyUsed(PieceValue),
}

/// Errors from placing the selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// The game has already ended in a win or draw.
    #[error("the game has already been finished")]
    GameFinished,

    /// No piece is selected; a selection must come first.
    #[error("no piece is currently selected")]
    NoPieceSelected,

    /// Coordinates outside the board on a non-torus board.
    #[error("coordinates ({x}|{y}) are outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// The piece value handed to the board is outside 0..=15.
    #[error("the piece in question is invalid")]
    InvalidPiece,

    /// The target cell already holds a piece.
    #[error("cell ({x}|{y}) is already in use")]
    CellOccupied { x: usize, y: usize },
}

/// Errors from rendering a single row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Row or column index outside the board on a non-torus board.
    #[error("index {index} is outside the board of size {size}")]
    IndexOutOfRange { index: i32, size: usize },
}
