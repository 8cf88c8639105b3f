//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the inverse mapping from a
//! terminal cell back to a grid cell, which mouse input needs.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the framed grid lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// First terminal column/row inside the border.
    pub fn inner_origin(&self) -> (u16, u16) {
        (self.start_x.saturating_add(1), self.start_y.saturating_add(1))
    }
}

/// Largest accepted cell width or height in terminal cells.
pub const MAX_CELL_SIZE: u16 = 16;

const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 12;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the puzzle grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells square-ish and large enough to hit with a mouse.
        Self::new(4, 2)
    }
}

impl GameView {
    /// Sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (GRID_SIZE as u16).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = (GRID_SIZE as u16).saturating_mul(self.cell_h).saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Grid cell under terminal position (`column`, `row`).
    ///
    /// Positions outside the grid give coordinates outside `0..GRID_SIZE`
    /// (negative to the left/top), saturated to the `i8` range.
    pub fn grid_cell_at(&self, viewport: Viewport, column: u16, row: u16) -> (i8, i8) {
        let (ox, oy) = self.layout(viewport).inner_origin();
        let x = (column as i32 - ox as i32).div_euclid(self.cell_w as i32);
        let y = (row as i32 - oy as i32).div_euclid(self.cell_h as i32);
        (saturate_i8(x), saturate_i8(y))
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let (ox, oy) = layout.inner_origin();

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            ox,
            oy,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        self.draw_border(fb, layout, border);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, ox, oy, x as u16, y as u16, *color),
                    None => self.draw_empty_cell(fb, ox, oy, x as u16, y as u16),
                }
            }
        }

        if snap.running {
            self.draw_piece(fb, snap, ox, oy);
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over() {
            self.draw_overlay_text(fb, layout, &["GAME OVER", "q to quit"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout, style: CellStyle) {
        let BoardLayout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, ox, oy, x, y, ' ', style);
        // One dot per cell, top-left, so wide cells don't look like noise.
        fb.put_char(
            ox.saturating_add(x * self.cell_w),
            oy.saturating_add(y * self.cell_h),
            '·',
            style,
        );
    }

    fn draw_block(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: u16, y: u16, color: BlockColor) {
        let style = CellStyle {
            fg: Rgb::from(color),
            bg: BOARD_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, ox, oy, x, y, '█', style);
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ox: u16, oy: u16) {
        let color = Rgb::from(snap.piece.color);
        let (ch, style) = if snap.placeable {
            (
                '█',
                CellStyle {
                    fg: color.mix(Rgb::new(255, 255, 255), 60),
                    bg: BOARD_BG,
                    bold: true,
                    dim: false,
                },
            )
        } else {
            (
                '▒',
                CellStyle {
                    fg: color.mix(Rgb::new(120, 120, 120), 140),
                    bg: BOARD_BG,
                    bold: false,
                    dim: true,
                },
            )
        };

        let n = GRID_SIZE as i8;
        for (x, y) in snap.piece.cells() {
            if (0..n).contains(&x) && (0..n).contains(&y) {
                self.fill_cell_rect(fb, ox, oy, x as u16, y as u16, ch, style);
            }
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        oy: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = ox.saturating_add(cell_x * self.cell_w);
        let py = oy.saturating_add(cell_y * self.cell_h);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(PANEL_GAP);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < PANEL_MIN_W {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = CellStyle { dim: true, ..value };

        let mut y = layout.start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("ROWS", snap.rows_cleared),
            ("COLS", snap.columns_cleared),
            ("PIECES", snap.pieces_placed),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        let swatch = CellStyle::plain(Rgb::from(snap.piece.color), PANEL_BG);
        fb.put_str(panel_x, y, "██", swatch);
        fb.put_str(panel_x + 3, y, snap.piece.name, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        match snap.seed {
            Some(seed) => fb.put_u64(panel_x, y, seed, dim),
            None => fb.put_str(panel_x, y, "-", dim),
        }
        y = y.saturating_add(2);

        for help in ["drag   move", "space  place", "r      reset", "q      quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: BoardLayout, lines: &[&str]) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };
        let top = layout
            .start_y
            .saturating_add(layout.frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout
                .start_x
                .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), text, style);
        }
    }
}

fn saturate_i8(v: i32) -> i8 {
    v.clamp(i8::MIN as i32, i8::MAX as i32) as i8
}
