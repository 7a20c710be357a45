//! Terminal detection.

use tracing::debug;

use super::engine::{GameResult, TerminalReason};
use super::movegen::Phase;
use crate::board::Board;
use crate::core::PlayerId;

/// Classify the position with `to_move` about to act.
///
/// Checked in order:
/// 1. the player who just moved stands on the cap: they win
/// 2. the player to act already stands on the cap: they win
/// 3. the player to act has no legal action: the opponent wins
///
/// Placement never ends the game.
#[must_use]
pub fn classify_terminal(
    board: &Board,
    to_move: PlayerId,
    phase: Phase,
    num_legal: usize,
) -> Option<GameResult> {
    if phase == Phase::Placement {
        return None;
    }

    let result = [to_move.opponent(), to_move]
        .into_iter()
        .find(|&player| on_top_floor(board, player))
        .map(|winner| GameResult::new(winner, TerminalReason::ReachedTopFloor))
        .or_else(|| {
            (num_legal == 0)
                .then(|| GameResult::new(to_move.opponent(), TerminalReason::NoLegalActions))
        });

    if let Some(result) = result {
        debug!(winner = result.winner.0, reason = ?result.reason, "game over");
    }
    result
}

/// Whether any of the player's workers stands at the cap height.
#[must_use]
pub fn on_top_floor(board: &Board, player: PlayerId) -> bool {
    let cap = board.max_floors();
    board
        .workers(player)
        .iter()
        .any(|&pos| board.height(pos) == cap)
}
