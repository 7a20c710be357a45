//! Game-facing trait and terminal results.
//!
//! `SequentialGame` is the surface a search or learning framework drives:
//! - integer legal actions, sorted ascending
//! - apply, terminal check, returns
//! - notation and observations per player
//!
//! `SantoriniState` is the one implementation; playouts and the Python
//! binding only talk to the trait.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Result, MAX_UTILITY, MIN_UTILITY, NUM_PLAYERS};
use crate::nn::EncodedState;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalReason {
    /// A worker stands on a tower at the cap.
    ReachedTopFloor,
    /// The player to move has no legal action.
    NoLegalActions,
}

/// Result of a completed game. There are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// The winning player.
    pub winner: PlayerId,
    /// How the game was decided.
    pub reason: TerminalReason,
}

impl GameResult {
    /// Create a result.
    #[must_use]
    pub fn new(winner: PlayerId, reason: TerminalReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// The losing player.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }

    /// Zero-sum `±1` returns indexed by player.
    #[must_use]
    pub fn returns(&self) -> [f64; NUM_PLAYERS] {
        let mut returns = [MIN_UTILITY; NUM_PLAYERS];
        returns[self.winner.index()] = MAX_UTILITY;
        returns
    }
}

/// A two-player, sequential, deterministic game state.
///
/// ## Implementation Notes
///
/// - `legal_actions`: ascending ids, empty once terminal
/// - `apply_action`: rejects ids outside the legal set instead of ignoring them
/// - `current_player`: `None` once terminal
pub trait SequentialGame: Clone {
    /// Player to act, or `None` if the game is over.
    fn current_player(&self) -> Option<PlayerId>;

    /// Legal action ids for the player to act, ascending.
    fn legal_actions(&self) -> &[usize];

    /// Apply a legal action id and hand the turn over.
    fn apply_action(&mut self, action: usize) -> Result<()>;

    /// Whether the game is over.
    fn is_terminal(&self) -> bool;

    /// The result, once terminal.
    fn result(&self) -> Option<GameResult>;

    /// Per-player returns; all zero until terminal.
    fn returns(&self) -> [f64; NUM_PLAYERS];

    /// Size of the encoded action space.
    fn num_distinct_actions(&self) -> usize;

    /// Human-readable form of an action id in this state.
    fn action_to_string(&self, player: PlayerId, action: usize) -> Result<String>;

    /// Inverse of `action_to_string` in this state.
    fn string_to_action(&self, player: PlayerId, text: &str) -> Result<usize>;

    /// String identifying the player's information state.
    fn information_state_string(&self, player: PlayerId) -> String;

    /// Observation string from the player's point of view.
    fn observation_string(&self, player: PlayerId) -> String;

    /// Observation tensor from the player's point of view.
    fn observation_tensor(&self, player: PlayerId) -> EncodedState;

    // === Convenience Methods ===

    /// Dense legal-action mask over the whole action space.
    fn legal_actions_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.num_distinct_actions()];
        for &action in self.legal_actions() {
            mask[action] = true;
        }
        mask
    }

    /// Whether an id is legal right now.
    fn is_legal(&self, action: usize) -> bool {
        self.legal_actions().binary_search(&action).is_ok()
    }

    /// Clone and apply, leaving `self` untouched.
    fn child(&self, action: usize) -> Result<Self> {
        let mut next = self.clone();
        next.apply_action(action)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::new(PlayerId::SECOND, TerminalReason::ReachedTopFloor);

        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
        assert_eq!(result.loser(), PlayerId::FIRST);
    }

    #[test]
    fn test_game_result_returns_are_zero_sum() {
        for winner in PlayerId::all() {
            for reason in [TerminalReason::ReachedTopFloor, TerminalReason::NoLegalActions] {
                let returns = GameResult::new(winner, reason).returns();

                assert_eq!(returns[winner.index()], 1.0);
                assert_eq!(returns[winner.opponent().index()], -1.0);
                assert_eq!(returns.iter().sum::<f64>(), 0.0);
            }
        }
    }
}
