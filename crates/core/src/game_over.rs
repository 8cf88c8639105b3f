//! Game-over detection
//!
//! A new piece ends the game when it cannot be placed anywhere along the top
//! row. Lower rows are never searched: a piece that would only fit further
//! down still ends the game.

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::placement::can_place;
use crate::types::GRID_SIZE;

/// First top-row anchor where the piece fits, if any
pub fn first_top_row_fit(grid: &Grid, piece: &Piece) -> Option<(i8, i8)> {
    (0..GRID_SIZE as i8)
        .map(|x| (x, 0))
        .find(|&anchor| can_place(grid, piece, anchor))
}

/// True when `can_place(piece, (x, 0))` fails for every column x
pub fn is_game_over(grid: &Grid, piece: &Piece) -> bool {
    first_top_row_fit(grid, piece).is_none()
}
