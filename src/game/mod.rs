mod grid;
pub use grid::*;
mod maze;
pub use maze::*;
pub mod tree;
