//! Terminal renderer for the block puzzle.
//!
//! Renders into a plain framebuffer that is diffed and flushed to the
//! terminal, without a widget toolkit. Cells are drawn several columns wide
//! so the grid stays square and easy to target with the mouse.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
