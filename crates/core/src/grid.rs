//! Grid module - owns the cell-occupancy state
//!
//! The grid is a 10x10 field where each cell is empty or holds a block color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom), both in 0..GRID_SIZE.

use std::fmt;

use crate::types::{BlockColor, Cell, GRID_CELLS, GRID_SIZE};

/// Returned when a coordinate does not name a grid cell.
///
/// Callers are expected to validate coordinates (see `placement`), so this is
/// a contract violation rather than a gameplay condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { x: i8, y: i8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", x, y, GRID_SIZE, GRID_SIZE)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The game grid - GRID_SIZE x GRID_SIZE cells using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * GRID_SIZE + x)
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Result<usize, GridError> {
        if !Self::in_bounds(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok((y as usize) * (GRID_SIZE as usize) + (x as usize))
    }

    /// Get the side length of the grid
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Check whether (x, y) names a cell
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < GRID_SIZE as i8 && y >= 0 && y < GRID_SIZE as i8
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> Result<bool, GridError> {
        Self::index(x, y).map(|idx| self.cells[idx].is_some())
    }

    pub fn cell_color(&self, x: i8, y: i8) -> Result<Option<BlockColor>, GridError> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    pub fn set_cell(&mut self, x: i8, y: i8, color: BlockColor) -> Result<(), GridError> {
        let idx = Self::index(x, y)?;
        self.cells[idx] = Some(color);
        Ok(())
    }

    pub fn clear_cell(&mut self, x: i8, y: i8) -> Result<(), GridError> {
        let idx = Self::index(x, y)?;
        self.cells[idx] = None;
        Ok(())
    }

    /// Check if position is in bounds and empty
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        matches!(self.cell_color(x, y), Ok(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_SIZE as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_column_full(&self, x: usize) -> bool {
        if x >= GRID_SIZE as usize {
            return false;
        }
        let width = GRID_SIZE as usize;
        (0..GRID_SIZE as usize).all(|y| self.cells[y * width + x].is_some())
    }

    /// Borrow one row of cells
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * GRID_SIZE as usize;
        &self.cells[start..start + GRID_SIZE as usize]
    }

    /// Iterate over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_SIZE as usize)
    }

    /// Number of occupied cells on the grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access for the line-clear engine
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell; GRID_CELLS] {
        &mut self.cells
    }

    /// Copy the grid into a 2D array (used by snapshots)
    pub fn write_cells_into(&self, out: &mut [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with one color (test and bench helper)
    pub fn fill_row(&mut self, y: usize, color: BlockColor) {
        let start = y * GRID_SIZE as usize;
        self.cells[start..start + GRID_SIZE as usize].fill(Some(color));
    }

    /// Fill a whole column with one color (test and bench helper)
    pub fn fill_column(&mut self, x: usize, color: BlockColor) {
        let width = GRID_SIZE as usize;
        for y in 0..GRID_SIZE as usize {
            self.cells[y * width + x] = Some(color);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
