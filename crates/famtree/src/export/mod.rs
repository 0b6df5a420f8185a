//! Export module for rendering trees in external tools.
//!
//! Snapshots (the round-trippable format) live in [`crate::snapshot`]; this
//! module holds one-way renderings:
//! - **DOT**: Graphviz visualization

pub mod dot;

pub use dot::{export_dot, export_dot_styled, DotOptions};
