//! Legal-action generation.
//!
//! Output order is fixed: worker index, then destination cell index, then
//! build cell index (placements: first cell, then second). Callers may index
//! into the list positionally, and the order matches ascending encoded ids.

use tracing::trace;

use crate::action::Action;
use crate::board::Board;
use crate::core::{PlayerId, NUM_PLAYERS, WORKERS_PER_PLAYER};

/// Worker placements before movement starts.
pub const TOTAL_PLACEMENTS: usize = NUM_PLAYERS * WORKERS_PER_PLAYER;

/// Game phase, derived from the number of workers placed so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Workers are still being placed.
    Placement,
    /// Every turn is one move and one build.
    Movement,
}

impl Phase {
    /// Phase for a given placement counter.
    #[must_use]
    pub fn from_workers_placed(workers_placed: usize) -> Self {
        if workers_placed < TOTAL_PLACEMENTS {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }
}

/// All legal structured actions for `player` on `board`.
///
/// The first placement turn allows every pair on the (empty) board; the second
/// only pairs of unoccupied cells. In movement, a worker may climb at most one
/// floor, drop any number, and never step onto a capped tower or an occupied
/// cell. The build goes on a neighbour of the destination that is empty (the
/// vacated origin counts as empty) and below the cap.
#[must_use]
pub fn compute_legal_actions(board: &Board, player: PlayerId, workers_placed: usize) -> Vec<Action> {
    let actions = match Phase::from_workers_placed(workers_placed) {
        Phase::Placement => placement_actions(board, workers_placed),
        Phase::Movement => movement_actions(board, player),
    };
    trace!(player = player.0, count = actions.len(), "generated legal actions");
    actions
}

fn placement_actions(board: &Board, workers_placed: usize) -> Vec<Action> {
    let cells = board.num_cells();
    let filter_occupied = workers_placed > 0;
    let free = |pos: usize| !filter_occupied || !board.is_occupied(pos);

    let mut actions = Vec::with_capacity(cells * (cells - 1) / 2);
    for first in (0..cells).filter(|&pos| free(pos)) {
        for second in ((first + 1)..cells).filter(|&pos| free(pos)) {
            actions.push(Action::Placement { first, second });
        }
    }
    actions
}

fn movement_actions(board: &Board, player: PlayerId) -> Vec<Action> {
    let max_floors = board.max_floors();
    let mut actions = Vec::new();

    for (worker, &from) in board.workers(player).iter().enumerate() {
        let climb_limit = max_floors.min(board.height(from) + 1);

        for to in board.neighbours(from) {
            if board.is_occupied(to) || board.height(to) > climb_limit {
                continue;
            }
            for build in board.neighbours(to) {
                if (build != from && board.is_occupied(build)) || board.height(build) >= max_floors {
                    continue;
                }
                actions.push(Action::MoveBuild { worker, to, build });
            }
        }
    }
    actions
}
