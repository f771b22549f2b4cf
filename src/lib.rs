//! Single-agent chess token redistribution on a 2-D column grid.
//!
//! A board holds per-column stacks of tokens; one porter agent walks the
//! board, collects tokens a row at a time and re-packs them against the
//! inward edge of the row, repeating upward until a whole row comes up
//! empty.

pub mod board;
pub mod porter;
pub mod render;

pub use board::{Board, Cell, Direction};
pub use porter::{Agent, Redistributor};
