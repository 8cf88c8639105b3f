//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 10x10 cell-occupancy state
//! - [`pieces`]: Shape catalog and the active piece
//! - [`placement`]: Movement and placement validation, commit
//! - [`line_clear`]: Row-then-column clearing and scoring
//! - [`game_over`]: Top-row placement search for a new piece
//! - [`session`]: Piece lifecycle, score, and running/game-over state
//! - [`snapshot`]: Read-only copies of session state for renderers
//! - [`rng`]: Seedable random source
//!
//! # Game Rules
//!
//! - A piece is dragged anywhere on the grid, even over occupied cells
//! - It can only be committed where every cell it covers is empty
//! - After a commit, full rows are removed first (rows above slide down),
//!   then full columns of the resulting grid are emptied in place
//! - Each cleared row or column scores 10 points
//! - The game ends when a freshly spawned piece fits nowhere on the top row
//!
//! # Example
//!
//! ```
//! use block_blast_core::Session;
//! use block_blast_types::Intent;
//!
//! let mut session = Session::with_seed(12345);
//!
//! // Any catalog piece fits in the bottom-left corner of an empty grid.
//! let (_, height) = session.piece().extent();
//! assert!(session.apply(Intent::PlaceAttempt { x: 0, y: 10 - height }));
//! assert!(session.is_running());
//! assert_eq!(session.pieces_placed(), 1);
//! ```

pub mod game_over;
pub mod grid;
pub mod line_clear;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use game_over::is_game_over;
pub use grid::{Grid, GridError};
pub use line_clear::{clear_lines, ClearResult};
pub use pieces::{CellOffset, Piece, ShapeTemplate, SHAPE_CATALOG};
pub use placement::{can_move, can_place, commit_placement, PlacementError};
pub use rng::{SeededSource, SessionRng};
pub use session::{Phase, PlaceOutcome, Session};
pub use snapshot::{GameSnapshot, PieceSnapshot};
