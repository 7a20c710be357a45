//! Santorini rules.
//!
//! - `movegen`: legal structured actions for a board and mover
//! - `terminal`: win/loss classification
//! - `engine`: the `SequentialGame` trait the state machine implements
//!
//! Rules are pure functions over `Board`; the state machine owns all mutation.

pub mod engine;
pub mod movegen;
pub mod terminal;

pub use engine::{GameResult, SequentialGame, TerminalReason};
pub use movegen::{compute_legal_actions, Phase, TOTAL_PLACEMENTS};
pub use terminal::{classify_terminal, on_top_floor};
