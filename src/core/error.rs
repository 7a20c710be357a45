//! Engine error type.
//!
//! The engine has no I/O and no transient failures. Every error here is a
//! caller bug (bad id, illegal action, malformed notation, bad config) and is
//! reported instead of being corrected.

use super::player::PlayerId;

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Configuration outside the supported range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Board handed to the engine breaks a setup invariant.
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// Parameter key not part of the game's parameter schema.
    #[error("Unknown game parameter: {0}")]
    UnknownParameter(String),

    /// Encoded action id is not in `[0, num_distinct_actions)`.
    #[error("Action {action} out of range, expected < {num_actions}")]
    ActionOutOfRange { action: usize, num_actions: usize },

    /// Action id is in range but not legal in the current state.
    #[error("Action {action} is not legal in the current state")]
    IllegalAction { action: usize },

    /// Structured action that no encoded id describes.
    #[error("Malformed action: {0}")]
    MalformedAction(String),

    /// An action was applied to a finished game.
    #[error("Game is over, no further actions can be applied")]
    GameOver,

    /// A movement action referenced a worker the player does not have.
    #[error("Player {player} has no worker {worker} on the board")]
    MissingWorker { player: PlayerId, worker: usize },

    /// Action notation could not be parsed.
    #[error("Cannot parse action: {0}")]
    ParseAction(String),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::ActionOutOfRange {
            action: 500,
            num_actions: 428,
        };
        assert_eq!(err.to_string(), "Action 500 out of range, expected < 428");

        let err = EngineError::MissingWorker {
            player: PlayerId::SECOND,
            worker: 1,
        };
        assert_eq!(err.to_string(), "Player 1 has no worker 1 on the board");
    }
}
