//! The Santorini state machine and random playouts.

pub mod playout;
pub mod state;

pub use playout::{random_playout, sample_action};
pub use state::SantoriniState;
