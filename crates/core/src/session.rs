//! Session module - owns the complete game state
//!
//! This module ties together all core components: grid, pieces, placement,
//! line clearing, and game-over detection. It drives the piece lifecycle:
//! spawn, attempt placement, clear, spawn next.

use log::{debug, info};
use rand::RngCore;

use crate::game_over::is_game_over;
use crate::grid::Grid;
use crate::line_clear::{clear_lines, ClearResult};
use crate::pieces::Piece;
use crate::placement::{can_move, can_place, check_placement, commit_placement};
use crate::rng::{SeededSource, SessionRng};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::Intent;

/// Session lifecycle. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Result of a placement attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The piece did not fit (or the game is over); nothing changed
    Rejected,
    /// The piece was committed and a fresh piece is now current
    Placed(ClearResult),
    /// The piece was committed but the fresh piece ended the game
    GameOver(ClearResult),
}

impl PlaceOutcome {
    pub fn committed(&self) -> bool {
        !matches!(self, PlaceOutcome::Rejected)
    }

    pub fn clear_result(&self) -> Option<&ClearResult> {
        match self {
            PlaceOutcome::Rejected => None,
            PlaceOutcome::Placed(c) | PlaceOutcome::GameOver(c) => Some(c),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session<R: RngCore = SessionRng> {
    grid: Grid,
    piece: Piece,
    rng: R,
    score: u32,
    rows_cleared: u32,
    columns_cleared: u32,
    pieces_placed: u32,
    phase: Phase,
}

impl Session<SessionRng> {
    /// Start a session seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(SessionRng::from_entropy())
    }

    /// Start a session with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SessionRng::new(seed))
    }
}

impl Default for Session<SessionRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Session<R> {
    /// Start a session on an empty grid drawing pieces from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let piece = Piece::spawn_random(&mut rng);
        Self::from_parts(Grid::new(), piece, rng)
    }

    /// Resume from an existing grid and current piece
    ///
    /// The phase starts as `Running` regardless of the grid contents.
    pub fn from_parts(grid: Grid, piece: Piece, rng: R) -> Self {
        Self {
            grid,
            piece,
            rng,
            score: 0,
            rows_cleared: 0,
            columns_cleared: 0,
            pieces_placed: 0,
            phase: Phase::Running,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn columns_cleared(&self) -> u32 {
        self.columns_cleared
    }

    /// Rows plus columns cleared so far
    pub fn lines_cleared(&self) -> u32 {
        self.rows_cleared + self.columns_cleared
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    /// Whether the current piece fits at its current anchor
    pub fn placeable(&self) -> bool {
        can_place(&self.grid, &self.piece, self.piece.anchor())
    }

    /// Apply an input intent
    ///
    /// Returns true if the session state changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        if !self.is_running() {
            debug!("{} ignored after game over", intent.as_str());
            return false;
        }
        debug!("intent {} {:?}", intent.as_str(), intent);

        match intent {
            Intent::PlaceAttempt { x, y } => self.place_attempt((x, y)).committed(),
            Intent::PlaceAtAnchor => self.place_attempt(self.piece.anchor()).committed(),
            Intent::DragTo { x, y } => {
                let before = self.piece.anchor();
                self.drag_to(x, y);
                self.piece.anchor() != before
            }
            Intent::ResetAnchor => {
                let before = self.piece.anchor();
                self.reset_anchor();
                self.piece.anchor() != before
            }
            Intent::Nudge { dx, dy } => self.nudge(dx, dy),
        }
    }

    /// Commit the current piece with its anchor at `anchor`
    ///
    /// A piece that does not fit is ignored without touching any state.
    pub fn place_attempt(&mut self, anchor: (i8, i8)) -> PlaceOutcome {
        if !self.is_running() {
            return PlaceOutcome::Rejected;
        }
        if let Err(err) = check_placement(&self.grid, &self.piece, anchor) {
            debug!(
                "placement rejected at {:?} for {} [{}]: {}",
                anchor,
                self.piece.name(),
                err.code(),
                err
            );
            return PlaceOutcome::Rejected;
        }

        self.piece.move_to(anchor.0, anchor.1);
        if let Err(err) = commit_placement(&mut self.grid, &self.piece) {
            // can_place just passed on this exact grid and anchor.
            debug!("commit refused after validation: {}", err);
            return PlaceOutcome::Rejected;
        }
        self.pieces_placed += 1;
        debug!(
            "placed {} {} ({} cells) at {:?}",
            self.piece.color().as_str(),
            self.piece.name(),
            self.piece.shape().len(),
            anchor
        );

        let cleared = clear_lines(&mut self.grid);
        if !cleared.is_empty() {
            self.rows_cleared += cleared.rows.len() as u32;
            self.columns_cleared += cleared.columns.len() as u32;
            self.score += cleared.score;
            info!(
                "cleared rows {:?} columns {:?} for {} points (score {})",
                cleared.rows.as_slice(),
                cleared.columns.as_slice(),
                cleared.score,
                self.score
            );
        }

        let next = Piece::spawn_random(&mut self.rng);
        if is_game_over(&self.grid, &next) {
            self.phase = Phase::GameOver;
            info!(
                "game over: {} does not fit on the top row (score {}, pieces {})",
                next.name(),
                self.score,
                self.pieces_placed
            );
            return PlaceOutcome::GameOver(cleared);
        }

        self.piece = next;
        PlaceOutcome::Placed(cleared)
    }

    /// Move the anchor while dragging, snapping back to the origin if the
    /// piece would leave the grid
    pub fn drag_to(&mut self, x: i8, y: i8) {
        if !self.is_running() {
            return;
        }
        self.piece.move_to(x, y);
        if !can_move(&self.piece, (x, y)) {
            self.piece.reset_anchor();
        }
    }

    pub fn reset_anchor(&mut self) {
        if !self.is_running() {
            return;
        }
        self.piece.reset_anchor();
    }

    /// Shift the anchor by (dx, dy) when the piece stays on the grid
    pub fn nudge(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_running() {
            return false;
        }
        let (x, y) = self.piece.anchor();
        let target = (x.saturating_add(dx), y.saturating_add(dy));
        if target == (x, y) || !can_move(&self.piece, target) {
            return false;
        }
        self.piece.move_to(target.0, target.1);
        true
    }

    /// Seed of the piece sequence, when the source knows it
    pub fn seed(&self) -> Option<u64>
    where
        R: SeededSource,
    {
        self.rng.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot)
    where
        R: SeededSource,
    {
        self.write_snapshot(out);
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot
    where
        R: SeededSource,
    {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn write_snapshot(&self, out: &mut GameSnapshot) {
        self.grid.write_cells_into(&mut out.grid);
        out.piece = PieceSnapshot::from(self.piece);
        out.placeable = self.placeable();
        out.score = self.score;
        out.rows_cleared = self.rows_cleared;
        out.columns_cleared = self.columns_cleared;
        out.pieces_placed = self.pieces_placed;
        out.running = self.is_running();
        out.seed = None;
    }
}
