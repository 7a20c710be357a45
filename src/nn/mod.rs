//! Observation building for search and learning frameworks.
//!
//! ## Overview
//!
//! - **Tensor**: `EncodedState`, a flat `[channels, N, N]` buffer
//! - **Encoding**: `StateEncoder` trait and the `SantoriniEncoder` planes
//! - **Text**: `board_to_string`, the canonical board rendering
//!
//! ## Usage
//!
//! ```rust
//! use santorini_engine::board::Board;
//! use santorini_engine::core::{PlayerId, SantoriniConfig};
//! use santorini_engine::nn::{SantoriniEncoder, StateEncoder};
//!
//! let config = SantoriniConfig::default();
//! let encoder = SantoriniEncoder::new(config);
//! let encoded = encoder.encode(&Board::new(&config), PlayerId::FIRST);
//! assert_eq!(encoded.shape, vec![6, 5, 5]);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{
    board_to_string, height_glyph, occupant_marker, SantoriniEncoder, StateEncoder, HEIGHT_GLYPHS,
};
pub use traits::EncodedState;
