//! Packed per-cell state.
//!
//! The board stores one byte per cell: the low 3 bits are the tower height,
//! bit `3 + p` is set when player `p`'s worker stands on the cell. At most one
//! occupancy bit is ever set. Outside the board store cells are handled as the
//! unpacked `CellState`.

use crate::core::PlayerId;

/// Bits reserved for the tower height.
pub const FLOOR_BITS: u8 = 3;

const HEIGHT_MASK: u8 = (1 << FLOOR_BITS) - 1;

/// Packed cell byte.
pub type PackedCell = u8;

/// Unpacked cell: tower height and optional worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellState {
    /// Tower height, `0..=max_floors`.
    pub height: u8,
    /// Whose worker stands here, if any.
    pub occupant: Option<PlayerId>,
}

impl CellState {
    /// Empty ground-level cell.
    pub const EMPTY: CellState = CellState {
        height: 0,
        occupant: None,
    };

    /// Create a cell state.
    #[must_use]
    pub const fn new(height: u8, occupant: Option<PlayerId>) -> Self {
        Self { height, occupant }
    }

    /// Pack into the board byte format.
    #[must_use]
    pub fn pack(self) -> PackedCell {
        debug_assert!(self.height <= HEIGHT_MASK, "height {} does not fit", self.height);
        let occupancy = match self.occupant {
            Some(player) => occupant_bit(player),
            None => 0,
        };
        (self.height & HEIGHT_MASK) | occupancy
    }

    /// Unpack a board byte.
    #[must_use]
    pub fn unpack(packed: PackedCell) -> Self {
        Self {
            height: height_of(packed),
            occupant: occupant_of(packed),
        }
    }

    /// Whether a worker stands on this cell.
    #[must_use]
    pub fn is_occupied(self) -> bool {
        self.occupant.is_some()
    }
}

/// Occupancy flag for a player's worker.
#[inline]
#[must_use]
pub fn occupant_bit(player: PlayerId) -> PackedCell {
    1 << (FLOOR_BITS + player.0)
}

/// Height stored in a packed cell.
#[inline]
#[must_use]
pub fn height_of(packed: PackedCell) -> u8 {
    packed & HEIGHT_MASK
}

/// Occupant stored in a packed cell.
#[inline]
#[must_use]
pub fn occupant_of(packed: PackedCell) -> Option<PlayerId> {
    PlayerId::all().find(|&p| packed & occupant_bit(p) != 0)
}
