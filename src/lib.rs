//! Procedural maze layouts: a noise field seeds a grid of walls, then random walks dig corridors
//! through it.

pub mod maze_gen;

pub use maze_gen::{generate, Cell, CellState, Grid, MazeConfig, MazeError, MazeGenerator};
