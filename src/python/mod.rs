//! Python bindings for the Santorini engine.
//!
//! Exposes the game state to Python search and training code.
//!
//! # Quick Start
//!
//! ```python
//! import santorini_engine as se
//!
//! state = se.SantoriniState()
//! while not state.is_terminal():
//!     state.apply_action(state.legal_actions()[0])
//!
//! print(state)
//! print(state.returns())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineError, GAME_NAME};

mod py_game;

pub use py_game::*;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// santorini_engine: Santorini rules for search and learning.
#[pymodule]
fn santorini_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("GAME_NAME", GAME_NAME)?;
    m.add_class::<PySantoriniState>()?;
    Ok(())
}
