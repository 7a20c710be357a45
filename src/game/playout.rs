//! Uniformly random playouts.

use crate::core::{GameRng, Result};
use crate::rules::{GameResult, SequentialGame};

/// Pick a uniformly random legal action, or `None` if there is none.
pub fn sample_action<G: SequentialGame>(state: &G, rng: &mut GameRng) -> Option<usize> {
    rng.choose(state.legal_actions()).copied()
}

/// Play uniformly random legal actions until the game ends.
///
/// Returns the number of actions applied and the final result. `state` is
/// left at the terminal position.
pub fn random_playout<G: SequentialGame>(
    state: &mut G,
    rng: &mut GameRng,
) -> Result<(usize, Option<GameResult>)> {
    let mut applied = 0;
    while let Some(action) = sample_action(state, rng) {
        state.apply_action(action)?;
        applied += 1;
    }
    Ok((applied, state.result()))
}
