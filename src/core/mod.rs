//! Core types shared by every other module: players, configuration,
//! errors and the playout RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    SantoriniConfig, GAME_NAME, MAX_BOARD_SIZE, MAX_SUPPORTED_FLOORS, MAX_UTILITY, MIN_UTILITY,
    UTILITY_SUM, WORKERS_PER_PLAYER,
};
pub use error::{EngineError, Result};
pub use player::{PlayerId, NUM_PLAYERS};
pub use rng::GameRng;
