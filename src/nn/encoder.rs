//! Observation building.
//!
//! Transforms a board into the tensor and string views the search framework
//! consumes. Santorini is perfect-information, so the string is the same for
//! both observers; only the two worker planes of the tensor swap.

use crate::board::Board;
use crate::core::{PlayerId, SantoriniConfig, NUM_PLAYERS};
use crate::nn::traits::EncodedState;

/// Height glyphs, indexed by tower height.
pub const HEIGHT_GLYPHS: [char; 5] = ['⚬', '−', '=', '≡', '●'];

/// Encodes a board into tensors for a given observer.
///
/// Each encoder defines:
/// - How to convert a board to a tensor from a player's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode the board from a player's perspective.
    fn encode(&self, board: &Board, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;

    /// Get the number of players this encoder supports.
    fn player_count(&self) -> usize {
        NUM_PLAYERS
    }
}

/// One-hot board planes.
///
/// Channel layout for tower cap `MF`:
///
/// ```text
/// 0 .. MF-1    height h ≥ 1 sets channel h-1 (height 0 sets nothing)
/// MF           always zero
/// MF+1         observer's workers
/// MF+2         opponent's workers
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SantoriniEncoder {
    config: SantoriniConfig,
}

impl SantoriniEncoder {
    /// Create an encoder for a configuration.
    pub fn new(config: SantoriniConfig) -> Self {
        Self { config }
    }

    /// First worker channel; the opponent's follows it.
    fn worker_channel(&self) -> usize {
        1 + self.config.max_floors as usize
    }
}

impl StateEncoder for SantoriniEncoder {
    fn encode(&self, board: &Board, perspective: PlayerId) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        for pos in 0..board.num_cells() {
            let cell = board.cell(pos);

            if cell.height > 0 {
                let index = encoded.plane_index(cell.height as usize - 1, pos);
                encoded.set(index, 1.0);
            }

            if let Some(owner) = cell.occupant {
                let offset = usize::from(owner != perspective);
                let index = encoded.plane_index(self.worker_channel() + offset, pos);
                encoded.set(index, 1.0);
            }
        }

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        self.config.observation_shape().to_vec()
    }

    fn action_space_size(&self) -> usize {
        self.config.num_distinct_actions()
    }
}

/// Glyph for a tower height. Heights past the glyph table print as digits.
#[must_use]
pub fn height_glyph(height: u8) -> char {
    HEIGHT_GLYPHS
        .get(height as usize)
        .copied()
        .or_else(|| char::from_digit(u32::from(height), 10))
        .unwrap_or('?')
}

/// Marker for the worker on a cell: `A` for player 0, `B` for player 1.
#[must_use]
pub fn occupant_marker(occupant: Option<PlayerId>) -> char {
    match occupant {
        Some(PlayerId(0)) => 'A',
        Some(_) => 'B',
        None => ' ',
    }
}

/// Canonical board rendering: two characters per cell (height glyph then
/// worker marker), cells joined by a space, rows by a newline.
#[must_use]
pub fn board_to_string(board: &Board) -> String {
    let size = board.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let cell = board.cell(row * size + col);
                    let mut text = String::with_capacity(8);
                    text.push(height_glyph(cell.height));
                    text.push(occupant_marker(cell.occupant));
                    text
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
