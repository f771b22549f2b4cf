//! Board storage: cell states and the grid the agent walks on.

mod cell;
mod grid;

pub use cell::Cell;
pub use grid::{Board, Direction};
