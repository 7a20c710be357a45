//! The board store: an `N×N` grid of packed cells.
//!
//! Cells are addressed by row-major index (`row * N + col`). Workers have no
//! stored identity; a player's workers are found by scanning the grid in
//! index order, and their position in that scan is the worker index used by
//! movement actions.
//!
//! ## Example
//!
//! ```
//! use santorini_engine::board::Board;
//! use santorini_engine::core::{PlayerId, SantoriniConfig};
//!
//! let mut board = Board::new(&SantoriniConfig::default());
//! board.set_occupant(7, Some(PlayerId::FIRST));
//! board.set_occupant(2, Some(PlayerId::FIRST));
//! board.set_height(7, 2);
//!
//! // Scan order: lower cell index is worker 0.
//! assert_eq!(board.workers(PlayerId::FIRST).as_slice(), &[2, 7]);
//! assert_eq!(board.height(7), 2);
//! ```

use smallvec::SmallVec;

use super::cell::{height_of, occupant_bit, occupant_of, CellState, PackedCell, FLOOR_BITS};
use crate::core::{PlayerId, SantoriniConfig, WORKERS_PER_PLAYER};

/// The eight king-move offsets `(Δrow, Δcol)`, in lexicographic order.
///
/// For any cell, walking the directions in this order visits its neighbours
/// in ascending cell index.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbour list of a cell. Never more than 8 entries.
pub type Neighbours = SmallVec<[usize; 8]>;

/// A player's worker cells in scan order.
pub type WorkerCells = SmallVec<[usize; WORKERS_PER_PLAYER]>;

/// `N×N` grid of packed cells.
///
/// `SmallVec` keeps boards up to 6×6 inline, so cloning a state never
/// touches the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    max_floors: u8,
    cells: SmallVec<[PackedCell; 36]>,
}

impl Board {
    /// Create an empty board (all heights 0, no workers).
    #[must_use]
    pub fn new(config: &SantoriniConfig) -> Self {
        Self {
            size: config.board_size,
            max_floors: config.max_floors,
            cells: SmallVec::from_elem(0, config.num_cells()),
        }
    }

    /// Side length `N`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells `N²`.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Tower cap.
    #[must_use]
    pub fn max_floors(&self) -> u8 {
        self.max_floors
    }

    // === Cell access ===

    /// Unpacked state of a cell.
    #[must_use]
    pub fn cell(&self, pos: usize) -> CellState {
        CellState::unpack(self.cells[pos])
    }

    /// Tower height at a cell.
    #[must_use]
    pub fn height(&self, pos: usize) -> u8 {
        height_of(self.cells[pos])
    }

    /// Worker standing on a cell, if any.
    #[must_use]
    pub fn occupant(&self, pos: usize) -> Option<PlayerId> {
        occupant_of(self.cells[pos])
    }

    /// Whether any worker stands on a cell.
    #[must_use]
    pub fn is_occupied(&self, pos: usize) -> bool {
        self.cells[pos] >> FLOOR_BITS != 0
    }

    /// Set the tower height of a cell, keeping its occupant.
    pub fn set_height(&mut self, pos: usize, height: u8) {
        assert!(
            height <= self.max_floors,
            "height {height} exceeds max floors {}",
            self.max_floors
        );
        let occupant = self.occupant(pos);
        self.cells[pos] = CellState::new(height, occupant).pack();
    }

    /// Place or clear a worker, keeping the tower height.
    pub fn set_occupant(&mut self, pos: usize, occupant: Option<PlayerId>) {
        let height = self.height(pos);
        self.cells[pos] = CellState::new(height, occupant).pack();
    }

    /// Packed bytes in row-major order.
    #[must_use]
    pub fn packed_cells(&self) -> &[PackedCell] {
        &self.cells
    }

    // === Geometry ===

    /// `(row, col)` of a cell index.
    #[must_use]
    pub fn coord(&self, pos: usize) -> (usize, usize) {
        (pos / self.size, pos % self.size)
    }

    /// Cell index of `(row, col)`, if on the board.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// The cell one step from `pos` in direction `dir`, if on the board.
    #[must_use]
    pub fn step(&self, pos: usize, dir: (i8, i8)) -> Option<usize> {
        let (row, col) = self.coord(pos);
        let row = row.checked_add_signed(isize::from(dir.0))?;
        let col = col.checked_add_signed(isize::from(dir.1))?;
        self.index(row, col)
    }

    /// All on-board neighbours of `pos`, in ascending index order.
    #[must_use]
    pub fn neighbours(&self, pos: usize) -> Neighbours {
        DIRECTIONS.iter().filter_map(|&dir| self.step(pos, dir)).collect()
    }

    /// Whether `a` and `b` are distinct, king-move adjacent cells.
    #[must_use]
    pub fn is_neighbour(&self, a: usize, b: usize) -> bool {
        self.direction_between(a, b).is_some()
    }

    /// Rank in `DIRECTIONS` of the step from `from` to `to`, if adjacent.
    #[must_use]
    pub fn direction_between(&self, from: usize, to: usize) -> Option<usize> {
        let (r1, c1) = self.coord(from);
        let (r2, c2) = self.coord(to);
        let dr = r2 as isize - r1 as isize;
        let dc = c2 as isize - c1 as isize;
        DIRECTIONS
            .iter()
            .position(|&(r, c)| isize::from(r) == dr && isize::from(c) == dc)
    }

    // === Workers ===

    /// Cells holding `player`'s workers, in scan order.
    #[must_use]
    pub fn workers(&self, player: PlayerId) -> WorkerCells {
        let bit = occupant_bit(player);
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell & bit != 0)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Cell of `player`'s worker with the given scan-order index.
    #[must_use]
    pub fn worker(&self, player: PlayerId, worker: usize) -> Option<usize> {
        self.workers(player).get(worker).copied()
    }

    /// Total workers on the board, both players.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell >> FLOOR_BITS != 0).count()
    }
}
