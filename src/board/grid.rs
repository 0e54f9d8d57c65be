//! The game board: an N x N grid of optional piece values.
//!
//! The board owns the piece bag. An occupied cell stores the piece's
//! value, which doubles as the index of its bag entry - attribute reads
//! and the `used` flag therefore stay consistent between the bag view
//! and the board view of the same piece.
//!
//! ## Topology
//!
//! On a standard board, coordinates must lie in `[0, N)`. On a torus,
//! both coordinates wrap via floor modulus, so negative inputs land in
//! `[0, N)` rather than truncating toward zero: on a 6-wide torus,
//! x = -1 is column 5.

use serde::{Deserialize, Serialize};

use crate::core::bag::PieceBag;
use crate::core::error::{PlaceError, RenderError};
use crate::core::piece::{Piece, PieceValue};
use crate::core::player::PlayerId;

/// Placeholder for an empty cell in textual renderings.
const EMPTY_CELL: &str = "#";

/// The game board.
///
/// ## Example
///
/// ```
/// use quarto_engine::board::Board;
///
/// let mut board = Board::new(6, false);
/// board.place_piece(3, 0, 0).unwrap();
///
/// assert_eq!(board.render_row(0).unwrap(), "3 # # # # #");
/// assert!(board.place_piece(5, 0, 0).is_err()); // cell taken
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    torus: bool,
    /// Row-major occupancy: `cells[y * size + x]`.
    cells: Vec<Option<PieceValue>>,
    bag: PieceBag,
    current_player: Option<PlayerId>,
    selected: Option<PieceValue>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize, torus: bool) -> Self {
        assert!(size > 0, "Board size must be at least 1");

        Self {
            size,
            torus,
            cells: vec![None; size * size],
            bag: PieceBag::new(),
            current_player: None,
            selected: None,
        }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the board wraps around its edges.
    #[must_use]
    pub fn is_torus(&self) -> bool {
        self.torus
    }

    /// Change the topology. Only meaningful before play starts.
    pub fn set_torus(&mut self, torus: bool) {
        self.torus = torus;
    }

    /// The piece bag.
    #[must_use]
    pub fn bag(&self) -> &PieceBag {
        &self.bag
    }

    /// Mutable access to the piece bag.
    pub fn bag_mut(&mut self) -> &mut PieceBag {
        &mut self.bag
    }

    // === Players ===

    /// The current player, if one has been set.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    /// Set (or clear) the current player.
    pub fn set_current_player(&mut self, player: Option<PlayerId>) {
        self.current_player = player;
    }

    /// Flip to the other player.
    ///
    /// Flips strictly between player 0 and player 1; an undefined
    /// current player stays undefined until explicitly initialized.
    pub fn next_player(&mut self) {
        if let Some(player) = self.current_player {
            self.current_player = Some(player.opponent());
        }
    }

    // === Selection ===

    /// The piece chosen for the current player to place, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PieceValue> {
        self.selected
    }

    /// Set (or clear) the selected piece.
    pub fn set_selected(&mut self, selected: Option<PieceValue>) {
        self.selected = selected;
    }

    // === Occupancy ===

    /// The value occupying a cell, if any.
    ///
    /// Coordinates must already be normalized into `[0, N)`; panics
    /// otherwise.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<PieceValue> {
        assert!(x < self.size && y < self.size, "cell index out of range");
        self.cells[y * self.size + x]
    }

    /// The piece occupying a cell, resolved through the bag.
    #[must_use]
    pub fn piece_at(&self, x: usize, y: usize) -> Option<&Piece> {
        self.cell(x, y).map(|value| self.bag.get(value))
    }

    /// Whether a (normalized) cell is empty.
    #[must_use]
    pub fn is_empty_cell(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_none()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Normalize a coordinate pair.
    ///
    /// Torus: both coordinates wrap via floor modulus. Standard: both
    /// must already lie in `[0, N)`.
    pub fn normalize(&self, x: i32, y: i32) -> Result<(usize, usize), PlaceError> {
        let size = self.size as i32;

        if self.torus {
            Ok((x.rem_euclid(size) as usize, y.rem_euclid(size) as usize))
        } else if x < 0 || y < 0 || x >= size || y >= size {
            Err(PlaceError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        } else {
            Ok((x as usize, y as usize))
        }
    }

    /// Place a piece on the board.
    ///
    /// Validation order: coordinates first, then the piece value, then
    /// cell occupancy. On success the referenced bag piece is marked
    /// used, the cell aliases it, and the normalized coordinates are
    /// returned.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` on a standard board when a coordinate is outside
    ///   `[0, N)`
    /// - `InvalidPiece` when `piece` is outside 0..=15
    /// - `CellOccupied` when the target cell already holds a piece
    pub fn place_piece(
        &mut self,
        piece: u8,
        x: i32,
        y: i32,
    ) -> Result<(usize, usize), PlaceError> {
        let (nx, ny) = self.normalize(x, y)?;

        if piece > PieceValue::MAX {
            return Err(PlaceError::InvalidPiece);
        }
        let value = PieceValue::new(piece);

        let index = ny * self.size + nx;
        if self.cells[index].is_some() {
            return Err(PlaceError::CellOccupied { x: nx, y: ny });
        }

        self.bag.mark_used(value);
        self.cells[index] = Some(value);

        Ok((nx, ny))
    }

    // === Rendering ===

    /// Render one row as space-separated piece values, `#` for empty.
    ///
    /// Torus boards wrap the index via floor modulus; standard boards
    /// reject out-of-range indices.
    pub fn render_row(&self, row: i32) -> Result<String, RenderError> {
        let row = self.normalize_index(row)?;
        Ok(self.row_string(row))
    }

    /// Render one column as space-separated piece values, `#` for empty.
    pub fn render_column(&self, column: i32) -> Result<String, RenderError> {
        let column = self.normalize_index(column)?;

        let cells: Vec<String> = (0..self.size)
            .map(|y| self.cell_string(column, y))
            .collect();
        Ok(cells.join(" "))
    }

    /// Render the whole board, one row per line.
    #[must_use]
    pub fn render(&self) -> String {
        let rows: Vec<String> = (0..self.size).map(|y| self.row_string(y)).collect();
        rows.join("\n")
    }

    fn normalize_index(&self, index: i32) -> Result<usize, RenderError> {
        let size = self.size as i32;

        let normalized = if self.torus { index.rem_euclid(size) } else { index };
        if normalized < 0 || normalized >= size {
            return Err(RenderError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(normalized as usize)
    }

    fn row_string(&self, y: usize) -> String {
        let cells: Vec<String> = (0..self.size).map(|x| self.cell_string(x, y)).collect();
        cells.join(" ")
    }

    fn cell_string(&self, x: usize, y: usize) -> String {
        match self.cell(x, y) {
            Some(value) => value.to_string(),
            None => EMPTY_CELL.to_string(),
        }
    }

    // === Reset ===

    /// Clear the grid, reset the bag, and undefine the current player.
    pub fn reset(&mut self) {
        self.cells = vec![None; self.size * self.size];
        self.bag.reset();
        self.current_player = None;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, false);

        assert_eq!(board.size(), 6);
        assert!(!board.is_torus());
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.current_player(), None);
        assert_eq!(board.selected(), None);
        assert_eq!(board.bag().available_count(), 16);
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 1")]
    fn test_zero_size_panics() {
        let _ = Board::new(0, false);
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new(6, false);

        let placed = board.place_piece(9, 2, 3).unwrap();
        assert_eq!(placed, (2, 3));
        assert_eq!(board.cell(2, 3), Some(PieceValue::new(9)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_placed_piece_aliases_bag_entry() {
        let mut board = Board::new(6, false);
        board.place_piece(4, 1, 1).unwrap();

        let through_board = board.piece_at(1, 1).unwrap();
        assert!(through_board.is_used());
        assert_eq!(through_board.value(), PieceValue::new(4));

        // Same entry when read through the bag.
        assert!(board.bag().get(PieceValue::new(4)).is_used());
    }

    #[test]
    fn test_out_of_bounds_standard() {
        let mut board = Board::new(6, false);

        assert_eq!(
            board.place_piece(0, -1, 0),
            Err(PlaceError::OutOfBounds { x: -1, y: 0, size: 6 })
        );
        assert_eq!(
            board.place_piece(0, 0, 6),
            Err(PlaceError::OutOfBounds { x: 0, y: 6, size: 6 })
        );
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_torus_wraps_negative_coordinates() {
        let mut board = Board::new(6, true);

        let placed = board.place_piece(0, -1, 0).unwrap();
        assert_eq!(placed, (5, 0));
        assert_eq!(board.cell(5, 0), Some(PieceValue::new(0)));

        let placed = board.place_piece(1, 6, -7).unwrap();
        assert_eq!(placed, (0, 5));
    }

    #[test]
    fn test_torus_negative_exact_multiple_wraps_to_zero() {
        let mut board = Board::new(6, true);

        let placed = board.place_piece(2, -6, -12).unwrap();
        assert_eq!(placed, (0, 0));
    }

    #[test]
    fn test_invalid_piece_value() {
        let mut board = Board::new(6, false);

        assert_eq!(board.place_piece(16, 0, 0), Err(PlaceError::InvalidPiece));
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.bag().available_count(), 16);
    }

    #[test]
    fn test_occupied_cell_rejected_and_unchanged() {
        let mut board = Board::new(6, false);
        board.place_piece(7, 0, 0).unwrap();

        assert_eq!(
            board.place_piece(8, 0, 0),
            Err(PlaceError::CellOccupied { x: 0, y: 0 })
        );
        assert_eq!(board.cell(0, 0), Some(PieceValue::new(7)));
        // The rejected piece was never marked used.
        assert!(!board.bag().get(PieceValue::new(8)).is_used());
    }

    #[test]
    fn test_validation_order_bounds_before_piece() {
        let mut board = Board::new(6, false);

        // Both coordinates and piece are invalid; bounds win.
        assert_eq!(
            board.place_piece(99, -1, 0),
            Err(PlaceError::OutOfBounds { x: -1, y: 0, size: 6 })
        );
    }

    #[test]
    fn test_next_player_flips_and_respects_undefined() {
        let mut board = Board::new(6, false);

        board.next_player();
        assert_eq!(board.current_player(), None);

        board.set_current_player(Some(PlayerId::new(0)));
        board.next_player();
        assert_eq!(board.current_player(), Some(PlayerId::new(1)));
        board.next_player();
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_render_row_and_column() {
        let mut board = Board::new(6, false);
        board.place_piece(12, 0, 0).unwrap();
        board.place_piece(3, 2, 0).unwrap();
        board.place_piece(5, 0, 4).unwrap();

        assert_eq!(board.render_row(0).unwrap(), "12 # 3 # # #");
        assert_eq!(board.render_row(1).unwrap(), "# # # # # #");
        assert_eq!(board.render_column(0).unwrap(), "12 # # # 5 #");
    }

    #[test]
    fn test_render_index_errors_standard() {
        let board = Board::new(6, false);

        assert_eq!(
            board.render_row(6),
            Err(RenderError::IndexOutOfRange { index: 6, size: 6 })
        );
        assert_eq!(
            board.render_column(-1),
            Err(RenderError::IndexOutOfRange { index: -1, size: 6 })
        );
    }

    #[test]
    fn test_render_index_wraps_on_torus() {
        let mut board = Board::new(6, true);
        board.place_piece(11, 1, 5).unwrap();

        assert_eq!(board.render_row(-1).unwrap(), "# 11 # # # #");
        assert_eq!(board.render_row(11).unwrap(), "# 11 # # # #");
    }

    #[test]
    fn test_render_full_board() {
        let mut board = Board::new(3, false);
        board.place_piece(1, 0, 0).unwrap();
        board.place_piece(15, 2, 2).unwrap();

        assert_eq!(board.render(), "1 # #\n# # #\n# # 15");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new(6, false);
        board.set_current_player(Some(PlayerId::new(1)));
        board.set_selected(Some(PieceValue::new(2)));
        board.place_piece(2, 0, 0).unwrap();

        board.reset();

        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.current_player(), None);
        assert_eq!(board.selected(), None);
        assert_eq!(board.bag().available_count(), 16);
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new(4, true);
        board.place_piece(6, 1, 2).unwrap();
        board.set_current_player(Some(PlayerId::new(0)));

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
