//! Placement module - validates and commits pieces against the grid
//!
//! Two checks share one shape walk:
//! - movement validity only asks that every cell is on the grid, so a dragged
//!   piece may hover over occupied cells;
//! - placement validity additionally requires every target cell to be empty.

use std::fmt;

use crate::grid::Grid;
use crate::pieces::Piece;

/// Why a commit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds { x: i8, y: i8 },
    Occupied { x: i8, y: i8 },
}

impl PlacementError {
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::OutOfBounds { .. } => "out_of_bounds",
            PlacementError::Occupied { .. } => "occupied",
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { x, y } => {
                write!(f, "piece cell ({}, {}) would be off the grid", x, y)
            }
            PlacementError::Occupied { x, y } => {
                write!(f, "piece cell ({}, {}) is already occupied", x, y)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Check that the piece fits on the grid with its anchor at `anchor`
pub fn can_move(piece: &Piece, anchor: (i8, i8)) -> bool {
    piece.cells_at(anchor).all(|(x, y)| Grid::in_bounds(x, y))
}

/// Check that the piece fits on the grid and covers only empty cells
pub fn can_place(grid: &Grid, piece: &Piece, anchor: (i8, i8)) -> bool {
    check_placement(grid, piece, anchor).is_ok()
}

/// Same as [`can_place`] but reports the first offending cell
pub fn check_placement(grid: &Grid, piece: &Piece, anchor: (i8, i8)) -> Result<(), PlacementError> {
    for (x, y) in piece.cells_at(anchor) {
        match grid.is_occupied(x, y) {
            Err(_) => return Err(PlacementError::OutOfBounds { x, y }),
            Ok(true) => return Err(PlacementError::Occupied { x, y }),
            Ok(false) => {}
        }
    }
    Ok(())
}

/// Write the piece's color into every cell it covers at its current anchor
///
/// Callers must check [`can_place`] first. A violating commit is refused
/// before any cell is written, so the grid is never left half-updated.
pub fn commit_placement(grid: &mut Grid, piece: &Piece) -> Result<(), PlacementError> {
    check_placement(grid, piece, piece.anchor())?;

    for (x, y) in piece.cells() {
        // Every cell was bounds-checked above.
        grid.set_cell(x, y, piece.color())
            .map_err(|_| PlacementError::OutOfBounds { x, y })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor;

    const SQUARE: &[(i8, i8)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

    #[test]
    fn test_can_move_ignores_occupancy() {
        let mut grid = Grid::new();
        grid.fill_row(0, BlockColor::Gold);
        let piece = Piece::new(SQUARE, BlockColor::Tomato);

        assert!(can_move(&piece, (0, 0)));
        assert!(!can_place(&grid, &piece, (0, 0)));
    }

    #[test]
    fn test_bounds_on_every_edge() {
        let piece = Piece::new(SQUARE, BlockColor::Tomato);
        assert!(can_move(&piece, (8, 8)));
        assert!(!can_move(&piece, (9, 8)));
        assert!(!can_move(&piece, (8, 9)));
        assert!(!can_move(&piece, (-1, 0)));
        assert!(!can_move(&piece, (0, -1)));
    }

    #[test]
    fn test_check_placement_reports_first_bad_cell() {
        let mut grid = Grid::new();
        grid.set_cell(4, 5, BlockColor::Gold).unwrap();
        let piece = Piece::new(SQUARE, BlockColor::Tomato);

        assert_eq!(
            check_placement(&grid, &piece, (3, 5)),
            Err(PlacementError::Occupied { x: 4, y: 5 })
        );
        assert_eq!(
            check_placement(&grid, &piece, (9, 0)),
            Err(PlacementError::OutOfBounds { x: 10, y: 0 })
        );
    }

    #[test]
    fn test_commit_writes_color() {
        let mut grid = Grid::new();
        let mut piece = Piece::new(SQUARE, BlockColor::LimeGreen);
        piece.move_to(3, 5);

        commit_placement(&mut grid, &piece).unwrap();

        for (x, y) in [(3, 5), (4, 5), (3, 6), (4, 6)] {
            assert_eq!(grid.cell_color(x, y), Ok(Some(BlockColor::LimeGreen)));
        }
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn test_invalid_commit_leaves_grid_untouched() {
        let mut grid = Grid::new();
        grid.set_cell(1, 1, BlockColor::Gold).unwrap();
        let before = grid.clone();

        let piece = Piece::new(SQUARE, BlockColor::Tomato);
        let err = commit_placement(&mut grid, &piece).unwrap_err();

        assert_eq!(err, PlacementError::Occupied { x: 1, y: 1 });
        assert_eq!(err.code(), "occupied");
        assert_eq!(grid, before);
    }
}
