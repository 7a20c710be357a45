//! # santorini-engine
//!
//! Rules engine for the two-player board game Santorini, built to be driven
//! by tree search and self-play training.
//!
//! ## Design Principles
//!
//! 1. **Dense Integer Actions**: Search code sees only `usize` ids. Movement
//!    ids name a worker and two directions, so they are decoded against the
//!    live board.
//!
//! 2. **Forward-Only State**: No undo. States are cheap to clone (inline
//!    board, persistent history) and search clones instead.
//!
//! 3. **Derived, Not Stored**: Worker identity, phase, legal actions and the
//!    terminal result are recomputed from the board after each transition.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, errors, RNG
//! - `board`: Packed-cell grid and geometry
//! - `action`: Structured actions, integer codec, notation
//! - `rules`: Move generation, terminal detection, `SequentialGame`
//! - `game`: The `SantoriniState` state machine and random playouts
//! - `nn`: Observation tensors and board rendering
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use santorini_engine::{random_playout, GameRng, SantoriniConfig, SantoriniState, SequentialGame};
//!
//! let mut state = SantoriniState::new(SantoriniConfig::default()).unwrap();
//! let (_, result) = random_playout(&mut state, &mut GameRng::new(42)).unwrap();
//!
//! assert!(state.is_terminal());
//! assert_eq!(state.returns().iter().sum::<f64>(), 0.0);
//! assert!(result.is_some());
//! ```

pub mod action;
pub mod board;
pub mod core;
pub mod game;
pub mod nn;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, PlayerId, Result, SantoriniConfig, GAME_NAME, NUM_PLAYERS,
};

pub use crate::board::{Board, CellState, DIRECTIONS};

pub use crate::action::{Action, ActionCodec, ActionRecord};

pub use crate::rules::{
    classify_terminal, compute_legal_actions, GameResult, Phase, SequentialGame, TerminalReason,
};

pub use crate::game::{random_playout, sample_action, SantoriniState};

pub use crate::nn::{board_to_string, EncodedState, SantoriniEncoder, StateEncoder};
