//! Line-clear module - removes completed rows and columns and scores them
//!
//! Clearing runs in two phases after every commit:
//!
//! 1. **Rows**: every full row is removed at once. The remaining rows keep
//!    their order and slide down; empty rows refill the top.
//! 2. **Columns**: fullness is tested on the grid left by the row phase. A
//!    full column is emptied in place; nothing shifts.
//!
//! Each removed row and each emptied column is worth [`POINTS_PER_LINE`].

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{GRID_SIZE, POINTS_PER_LINE};

/// Outcome of one clear cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearResult {
    /// Indices of removed rows, top to bottom, as they were before compaction
    pub rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    /// Indices of emptied columns, left to right, on the compacted grid
    pub columns: ArrayVec<u8, { GRID_SIZE as usize }>,
    /// Points awarded for this cycle
    pub score: u32,
}

impl ClearResult {
    pub fn lines(&self) -> usize {
        self.rows.len() + self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines() == 0
    }
}

/// Points for a clear cycle
pub fn calculate_line_score(rows: usize, columns: usize) -> u32 {
    POINTS_PER_LINE * (rows + columns) as u32
}

/// Run the row phase then the column phase
pub fn clear_lines(grid: &mut Grid) -> ClearResult {
    let rows = clear_full_rows(grid);
    let columns = clear_full_columns(grid);
    let score = calculate_line_score(rows.len(), columns.len());
    ClearResult {
        rows,
        columns,
        score,
    }
}

/// Remove all full rows and compact toward the bottom
///
/// Uses a two-pointer pass from the bottom row upward with zero allocation.
/// Returns the removed row indices sorted top to bottom.
pub fn clear_full_rows(grid: &mut Grid) -> ArrayVec<u8, { GRID_SIZE as usize }> {
    let mut cleared = ArrayVec::new();
    let size = GRID_SIZE as usize;

    let full: ArrayVec<bool, { GRID_SIZE as usize }> =
        (0..size).map(|y| grid.is_row_full(y)).collect();
    let cells = grid.cells_mut();
    let mut write_y = size;

    for read_y in (0..size).rev() {
        if full[read_y] {
            cleared.push(read_y as u8);
            continue;
        }
        write_y -= 1;
        if write_y != read_y {
            cells.copy_within(read_y * size..(read_y + 1) * size, write_y * size);
        }
    }

    // Everything above the last written row is fresh empty space.
    cells[..write_y * size].fill(None);

    cleared.reverse();
    cleared
}

/// Empty every full column in place
pub fn clear_full_columns(grid: &mut Grid) -> ArrayVec<u8, { GRID_SIZE as usize }> {
    let mut cleared = ArrayVec::new();
    let size = GRID_SIZE as usize;

    for x in 0..size {
        if grid.is_column_full(x) {
            cleared.push(x as u8);
        }
    }

    let cells = grid.cells_mut();
    for &x in &cleared {
        for y in 0..size {
            cells[y * size + x as usize] = None;
        }
    }

    cleared
}
