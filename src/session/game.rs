//! The session state machine.
//!
//! Turn protocol: `AwaitingSelection` -> (`select`) ->
//! `AwaitingPlacement` -> (`place`) -> back to `AwaitingSelection`, or
//! `Finished` on a win or draw. Every rejected intent leaves the
//! session exactly as it was.
//!
//! A piece is marked used the moment it is selected, so a
//! selected-but-unplaced piece is already absent from the bag's
//! available sequence.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::config::SessionConfig;
use crate::core::error::{PlaceError, RenderError, SelectError};
use crate::core::piece::PieceValue;
use crate::core::player::PlayerId;
use crate::rules::winning_move;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionResult {
    /// The placing player completed a line of four.
    Win(PlayerId),
    /// The bag ran dry with no winning line.
    Draw,
}

/// Outcome of a single successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The game goes on; the other player is up.
    Continue,
    /// The placement completed a winning line.
    Win(PlayerId),
    /// The placement used the last piece without a win.
    Draw,
}

/// Where the turn protocol currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No piece is locked in; a selection is required.
    AwaitingSelection,
    /// A piece is locked in and must be placed.
    AwaitingPlacement,
    /// A win or draw has been recorded.
    Finished,
}

/// One successful placement, as recorded in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who placed the piece.
    pub player: PlayerId,
    /// The piece placed.
    pub piece: PieceValue,
    /// Normalized column of the placement.
    pub x: usize,
    /// Normalized row of the placement.
    pub y: usize,
    /// Round counter at the time of the placement.
    pub round: u32,
}

/// A single game: board, bag, turn protocol, and history.
///
/// Each session exclusively owns its state; independent games are
/// independent values. Cloning is cheap (the history is a persistent
/// vector), so drivers may snapshot a session freely.
///
/// ## Example
///
/// ```
/// use quarto_engine::session::{GameSession, PlacementOutcome};
///
/// let mut session = GameSession::default();
///
/// session.select(3).unwrap();
/// let outcome = session.place(0, 0).unwrap();
///
/// assert_eq!(outcome, PlacementOutcome::Continue);
/// assert_eq!(session.round(), 1);
/// assert_eq!(session.available_pieces().count(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    round: u32,
    finished: bool,
    result: Option<SessionResult>,
    history: Vector<MoveRecord>,
}

impl GameSession {
    /// Create a session from a configuration.
    ///
    /// Player 1 places first; the first completed placement hands the
    /// turn to player 0.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut board = Board::new(config.size, config.torus);
        board.set_current_player(Some(PlayerId::new(1)));

        Self {
            config,
            board,
            round: 0,
            finished: false,
            result: None,
            history: Vector::new(),
        }
    }

    /// Restore the session to a fresh game with the same configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.board.set_current_player(Some(PlayerId::new(1)));
        self.round = 0;
        self.finished = false;
        self.result = None;
        self.history.clear();
    }

    // === Intents ===

    /// Select a piece for the opponent to place.
    ///
    /// Marks the piece used and locks the selection.
    ///
    /// # Errors
    ///
    /// - `GameFinished` once a win or draw has been recorded
    /// - `SelectionLocked` while a selected piece awaits placement
    /// - `InvalidPieceValue` for values outside 0..=15
    /// - `PieceAlreadyUsed` when the piece was selected before
    #[instrument(skip(self))]
    pub fn select(&mut self, value: i32) -> Result<(), SelectError> {
        if self.finished {
            return Err(SelectError::GameFinished);
        }
        if self.board.selected().is_some() {
            return Err(SelectError::SelectionLocked);
        }

        let piece = self.board.bag().by_value(value)?;
        if self.board.bag().get(piece).is_used() {
            return Err(SelectError::PieceAlreadyUsed(piece));
        }

        self.board.bag_mut().mark_used(piece);
        self.board.set_selected(Some(piece));
        debug!(piece = %piece, "piece selected");

        Ok(())
    }

    /// Place the selected piece at `(x, y)`.
    ///
    /// On success the placement is appended to the history and the
    /// outcome decided: a completed line wins for the placing player,
    /// an exhausted bag draws, anything else continues with the other
    /// player (incrementing the round counter). Board-level rejections
    /// surface unchanged and mutate nothing.
    ///
    /// # Errors
    ///
    /// - `GameFinished` once a win or draw has been recorded
    /// - `NoPieceSelected` while no piece is locked in
    /// - `OutOfBounds` / `InvalidPiece` / `CellOccupied` from the board
    #[instrument(skip(self))]
    pub fn place(&mut self, x: i32, y: i32) -> Result<PlacementOutcome, PlaceError> {
        if self.finished {
            return Err(PlaceError::GameFinished);
        }
        let Some(piece) = self.board.selected() else {
            return Err(PlaceError::NoPieceSelected);
        };
        let player = self
            .board
            .current_player()
            .expect("session board always has a current player");

        let (nx, ny) = self.board.place_piece(piece.raw(), x, y)?;

        self.history.push_back(MoveRecord {
            player,
            piece,
            x: nx,
            y: ny,
            round: self.round,
        });

        if winning_move(&self.board, nx, ny) {
            debug!(%player, x = nx, y = ny, "winning placement");
            self.finished = true;
            self.result = Some(SessionResult::Win(player));
            return Ok(PlacementOutcome::Win(player));
        }

        if !self.board.bag().has_available() {
            debug!("bag exhausted without a winning line");
            self.finished = true;
            self.result = Some(SessionResult::Draw);
            return Ok(PlacementOutcome::Draw);
        }

        self.board.set_selected(None);
        self.board.next_player();
        self.round += 1;

        Ok(PlacementOutcome::Continue)
    }

    // === Queries ===

    /// The protocol phase the session is in.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.finished {
            SessionPhase::Finished
        } else if self.board.selected().is_some() {
            SessionPhase::AwaitingPlacement
        } else {
            SessionPhase::AwaitingSelection
        }
    }

    /// Rounds completed (successful non-terminal placements).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether a win or draw has been recorded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The recorded result, once finished.
    #[must_use]
    pub fn result(&self) -> Option<SessionResult> {
        self.result
    }

    /// The player whose turn it is to place.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.board.current_player()
    }

    /// The piece locked in for placement, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PieceValue> {
        self.board.selected()
    }

    /// Values of unused pieces, ascending. Recomputed per call.
    pub fn available_pieces(&self) -> impl Iterator<Item = PieceValue> + '_ {
        self.board.bag().available()
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// History of successful placements, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Rendering ===

    /// Render one row of the board.
    pub fn render_row(&self, row: i32) -> Result<String, RenderError> {
        self.board.render_row(row)
    }

    /// Render one column of the board.
    pub fn render_column(&self, column: i32) -> Result<String, RenderError> {
        self.board.render_column(column)
    }

    /// Render the whole board.
    #[must_use]
    pub fn render_board(&self) -> String {
        self.board.render()
    }
}

impl Default for GameSession {
    /// A 6x6 standard-topology session.
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
