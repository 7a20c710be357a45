//! Board store: packed cell format and the grid that owns it.

pub mod cell;
pub mod grid;

pub use cell::{CellState, PackedCell};
pub use grid::{Board, Neighbours, WorkerCells, DIRECTIONS};
