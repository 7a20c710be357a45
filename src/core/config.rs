//! Game configuration and derived game metadata.
//!
//! Board size and tower cap are the only parameters. Everything the search
//! framework needs to size its buffers (action count, observation shape,
//! game length bound) is derived from them, never hard-coded.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::player::NUM_PLAYERS;
use crate::board::DIRECTIONS;

/// Registered short name of the game.
pub const GAME_NAME: &str = "santorini";

/// Workers each player places and moves.
pub const WORKERS_PER_PLAYER: usize = 2;

/// Largest supported tower cap. Heights are packed into 3 bits.
pub const MAX_SUPPORTED_FLOORS: u8 = 7;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 8;

/// Utility of a loss.
pub const MIN_UTILITY: f64 = -1.0;

/// Utility of a win.
pub const MAX_UTILITY: f64 = 1.0;

/// Returns always sum to this.
pub const UTILITY_SUM: f64 = 0.0;

/// Santorini game parameters.
///
/// ## Example
///
/// ```
/// use santorini_engine::core::SantoriniConfig;
///
/// let config = SantoriniConfig::default();
/// assert_eq!(config.num_placement_actions(), 300);
/// assert_eq!(config.num_movement_actions(), 128);
/// assert_eq!(config.num_distinct_actions(), 428);
/// assert_eq!(config.observation_shape(), [6, 5, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SantoriniConfig {
    /// Side length `N` of the square board.
    pub board_size: usize,

    /// Tower cap. A worker standing on a tower of this height wins.
    pub max_floors: u8,
}

impl Default for SantoriniConfig {
    fn default() -> Self {
        Self {
            board_size: 5,
            max_floors: 3,
        }
    }
}

impl SantoriniConfig {
    /// Create and validate a configuration.
    pub fn new(board_size: usize, max_floors: u8) -> Result<Self> {
        let config = Self {
            board_size,
            max_floors,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from framework-style game parameters.
    ///
    /// Recognized keys are `board_size` and `max_floors`; missing keys take
    /// their default.
    pub fn from_params(params: &FxHashMap<String, i64>) -> Result<Self> {
        let mut config = Self::default();

        for (key, &value) in params {
            match key.as_str() {
                "board_size" => {
                    config.board_size = usize::try_from(value).map_err(|_| {
                        EngineError::InvalidConfig(format!("board_size must be positive, got {value}"))
                    })?;
                }
                "max_floors" => {
                    config.max_floors = u8::try_from(value).map_err(|_| {
                        EngineError::InvalidConfig(format!("max_floors out of range, got {value}"))
                    })?;
                }
                other => return Err(EngineError::UnknownParameter(other.to_string())),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is playable and fits the packed cell format.
    pub fn validate(&self) -> Result<()> {
        if self.board_size < 2 || self.board_size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "board_size must be in 2..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.max_floors == 0 || self.max_floors > MAX_SUPPORTED_FLOORS {
            return Err(EngineError::InvalidConfig(format!(
                "max_floors must be in 1..={MAX_SUPPORTED_FLOORS}, got {}",
                self.max_floors
            )));
        }
        Ok(())
    }

    /// Number of cells `N²`.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Size of the placement range, `C(N², 2)`.
    #[must_use]
    pub fn num_placement_actions(&self) -> usize {
        let cells = self.num_cells();
        cells * (cells - 1) / 2
    }

    /// Size of the movement range, `workers · D²`.
    #[must_use]
    pub fn num_movement_actions(&self) -> usize {
        WORKERS_PER_PLAYER * DIRECTIONS.len() * DIRECTIONS.len()
    }

    /// Total size of the encoded action space.
    #[must_use]
    pub fn num_distinct_actions(&self) -> usize {
        self.num_placement_actions() + self.num_movement_actions()
    }

    /// Observation tensor shape `[channels, rows, cols]`.
    #[must_use]
    pub fn observation_shape(&self) -> [usize; 3] {
        [
            1 + self.max_floors as usize + NUM_PLAYERS,
            self.board_size,
            self.board_size,
        ]
    }

    /// Upper bound on the number of actions in one game.
    #[must_use]
    pub fn max_game_length(&self) -> usize {
        NUM_PLAYERS * WORKERS_PER_PLAYER + self.num_cells() * (self.max_floors as usize + 1)
    }
}
