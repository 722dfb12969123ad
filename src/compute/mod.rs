//! Compute module - Cell grid simulation for the Game of Life.

mod grid;
mod rule;
mod stats;

pub use grid::*;
pub use rule::*;
pub use stats::*;
