//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Intent`]s and tracks mouse
//! drag state so a drag-and-drop gesture becomes a stream of `DragTo`
//! intents followed by one `PlaceAttempt`.

pub mod handler;
pub mod map;

pub use block_blast_types as types;

pub use handler::DragHandler;
pub use map::{handle_key_event, should_quit};
