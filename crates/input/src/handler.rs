//! Mouse drag handler for terminal environments.
//!
//! Turns raw mouse events into session intents:
//! - left press starts a drag and moves the piece under the pointer;
//! - left drag keeps moving it;
//! - left release drops it at the cell under the pointer;
//! - right release sends the piece back to the origin.
//!
//! Screen-to-grid mapping is supplied by the caller since only the view
//! knows where the grid is drawn.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Intent;

/// Tracks whether the left button is held over the game.
#[derive(Debug, Clone, Default)]
pub struct DragHandler {
    dragging: bool,
    last_cell: Option<(i8, i8)>,
}

impl DragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Translate one mouse event.
    ///
    /// `to_grid` maps terminal (column, row) to signed grid coordinates; it
    /// may return cells off the grid.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        to_grid: impl Fn(u16, u16) -> (i8, i8),
    ) -> Option<Intent> {
        let (x, y) = to_grid(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.dragging = true;
                self.last_cell = Some((x, y));
                Some(Intent::DragTo { x, y })
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.dragging = true;
                // Terminals report every pointer move; only cell changes matter.
                if self.last_cell == Some((x, y)) {
                    return None;
                }
                self.last_cell = Some((x, y));
                Some(Intent::DragTo { x, y })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dragging = false;
                self.last_cell = None;
                Some(Intent::PlaceAttempt { x, y })
            }
            MouseEventKind::Up(MouseButton::Right) => Some(Intent::ResetAnchor),
            _ => None,
        }
    }

    /// Forget any drag in progress (focus loss, resize).
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.last_cell = None;
    }
}
