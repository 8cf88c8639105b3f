//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is square:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 10 rows (indexed 0-9)
//! - **Spawn anchor**: (0, 0) for every piece
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{BlockColor, Intent, GRID_SIZE, PALETTE};
//!
//! assert_eq!(GRID_SIZE, 10);
//! assert_eq!(PALETTE.len(), 7);
//! assert_eq!(BlockColor::Gold.rgb(), (255, 215, 0));
//!
//! let intent = Intent::DragTo { x: 3, y: 4 };
//! assert!(matches!(intent, Intent::DragTo { .. }));
//! ```

/// Grid size in cells (the grid is `GRID_SIZE` x `GRID_SIZE`)
pub const GRID_SIZE: u8 = 10;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Points awarded per cleared row and per cleared column
pub const POINTS_PER_LINE: u32 = 10;

/// Anchor every freshly spawned piece starts at
pub const SPAWN_ANCHOR: (i8, i8) = (0, 0);

/// Block color tags.
///
/// The palette is fixed; every occupied cell holds one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    SteelBlue,
    Tomato,
    LimeGreen,
    Gold,
    BlueViolet,
    HotPink,
    Orange,
}

/// Every color a spawned piece may take, in selection order
pub const PALETTE: [BlockColor; 7] = [
    BlockColor::SteelBlue,
    BlockColor::Tomato,
    BlockColor::LimeGreen,
    BlockColor::Gold,
    BlockColor::BlueViolet,
    BlockColor::HotPink,
    BlockColor::Orange,
];

impl BlockColor {
    /// RGB triple used by renderers
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            BlockColor::SteelBlue => (70, 130, 180),
            BlockColor::Tomato => (255, 99, 71),
            BlockColor::LimeGreen => (50, 205, 50),
            BlockColor::Gold => (255, 215, 0),
            BlockColor::BlueViolet => (138, 43, 226),
            BlockColor::HotPink => (255, 105, 180),
            BlockColor::Orange => (255, 165, 0),
        }
    }

    /// Stable 1-based code (0 is reserved for empty cells)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::SteelBlue.code(), 1);
    /// assert_eq!(BlockColor::Orange.code(), 7);
    /// ```
    pub const fn code(self) -> u8 {
        match self {
            BlockColor::SteelBlue => 1,
            BlockColor::Tomato => 2,
            BlockColor::LimeGreen => 3,
            BlockColor::Gold => 4,
            BlockColor::BlueViolet => 5,
            BlockColor::HotPink => 6,
            BlockColor::Orange => 7,
        }
    }

    /// Lowercase name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::SteelBlue => "steel-blue",
            BlockColor::Tomato => "tomato",
            BlockColor::LimeGreen => "lime-green",
            BlockColor::Gold => "gold",
            BlockColor::BlueViolet => "blue-violet",
            BlockColor::HotPink => "hot-pink",
            BlockColor::Orange => "orange",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Cell occupied with the given color
pub type Cell = Option<BlockColor>;

/// Requests fed into the session by the input layer.
///
/// Coordinates are signed grid coordinates; values outside the grid are
/// legal and are rejected (or reverted) by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Commit the current piece with its anchor at (x, y)
    PlaceAttempt { x: i8, y: i8 },
    /// Commit the current piece at its current anchor
    PlaceAtAnchor,
    /// Move the anchor while dragging; reverts to the origin when invalid
    DragTo { x: i8, y: i8 },
    /// Force the anchor back to (0, 0)
    ResetAnchor,
    /// Shift the anchor by a delta, ignored when the target is out of bounds
    Nudge { dx: i8, dy: i8 },
}

impl Intent {
    /// Short name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::PlaceAttempt { .. } => "place_attempt",
            Intent::PlaceAtAnchor => "place_at_anchor",
            Intent::DragTo { .. } => "drag_to",
            Intent::ResetAnchor => "reset_anchor",
            Intent::Nudge { .. } => "nudge",
        }
    }
}
