//! Block Blast (workspace facade crate).
//!
//! Re-exports the workspace crates as `block_blast::{core,input,term,types}`
//! and holds the binary's runtime configuration.

pub mod config;

pub use block_blast_core as core;
pub use block_blast_input as input;
pub use block_blast_term as term;
pub use block_blast_types as types;
