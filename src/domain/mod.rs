mod cell;
mod grid;
mod rules;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::next_generation;
