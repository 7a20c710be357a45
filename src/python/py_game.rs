//! Game state binding for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rustc_hash::FxHashMap;

use crate::core::{PlayerId, SantoriniConfig, NUM_PLAYERS};
use crate::game::SantoriniState;
use crate::rules::SequentialGame;

/// Python wrapper for `SantoriniState`.
///
/// Players are plain ints (0 or 1). Every engine error surfaces as
/// `ValueError`.
#[pyclass(name = "SantoriniState")]
pub struct PySantoriniState {
    state: SantoriniState,
}

fn player_arg(player: u8) -> PyResult<PlayerId> {
    if (player as usize) < NUM_PLAYERS {
        Ok(PlayerId(player))
    } else {
        Err(PyValueError::new_err(format!(
            "player must be 0 or 1, got {player}"
        )))
    }
}

#[pymethods]
impl PySantoriniState {
    /// Create a new game.
    ///
    /// # Arguments
    /// - board_size: Side of the square board
    /// - max_floors: Tower cap; standing on it wins
    #[new]
    #[pyo3(signature = (board_size = 5, max_floors = 3))]
    fn new(board_size: i64, max_floors: i64) -> PyResult<Self> {
        let mut params = FxHashMap::default();
        params.insert("board_size".to_string(), board_size);
        params.insert("max_floors".to_string(), max_floors);
        let config = SantoriniConfig::from_params(&params)?;
        Ok(Self {
            state: SantoriniState::new(config)?,
        })
    }

    /// Player to act, or -1 once the game is over.
    #[getter]
    fn current_player(&self) -> i32 {
        self.state
            .current_player()
            .map_or(-1, |player| i32::from(player.0))
    }

    /// Legal action ids, ascending.
    fn legal_actions(&self) -> Vec<usize> {
        self.state.legal_actions().to_vec()
    }

    /// Apply a legal action id.
    fn apply_action(&mut self, action: usize) -> PyResult<()> {
        Ok(self.state.apply_action(action)?)
    }

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Per-player returns, all zero until terminal.
    fn returns(&self) -> Vec<f64> {
        self.state.returns().to_vec()
    }

    /// Size of the action space.
    fn num_distinct_actions(&self) -> usize {
        self.state.num_distinct_actions()
    }

    /// Number of actions applied so far.
    #[getter]
    fn move_number(&self) -> u32 {
        self.state.move_number()
    }

    /// Applied action ids, comma-separated.
    fn history_string(&self) -> String {
        self.state.history_string()
    }

    fn action_to_string(&self, player: u8, action: usize) -> PyResult<String> {
        Ok(self.state.action_to_string(player_arg(player)?, action)?)
    }

    fn string_to_action(&self, player: u8, text: &str) -> PyResult<usize> {
        Ok(self.state.string_to_action(player_arg(player)?, text)?)
    }

    fn information_state_string(&self, player: u8) -> PyResult<String> {
        Ok(self.state.information_state_string(player_arg(player)?))
    }

    fn observation_string(&self, player: u8) -> PyResult<String> {
        Ok(self.state.observation_string(player_arg(player)?))
    }

    /// Observation planes as a `(channels, N, N)` float32 array.
    fn observation_tensor<'py>(
        &self,
        py: Python<'py>,
        player: u8,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let encoded = self.state.observation_tensor(player_arg(player)?);
        let shape = self.state.config().observation_shape();
        PyArray1::from_vec_bound(py, encoded.tensor).reshape(shape)
    }

    /// Independent copy for tree search.
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    fn __str__(&self) -> String {
        self.state.to_string()
    }

    fn __repr__(&self) -> String {
        let status = if self.state.is_terminal() {
            "terminal"
        } else {
            "ongoing"
        };
        format!(
            "SantoriniState(move={}, to_move=P{}, status={})",
            self.state.move_number(),
            self.state.player_to_move(),
            status
        )
    }
}
