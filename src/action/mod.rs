//! Actions: structured form, dense integer codec, and text notation.
//!
//! Search code only ever sees integer ids. The state machine decodes an id
//! against its live board before applying it, and the move generator's
//! structured output is encoded the same way.

pub mod codec;
pub mod notation;
pub mod types;

pub use codec::ActionCodec;
pub use notation::{
    direction_notation, format_action, parse_action, parse_direction_notation, DIRECTION_SYMBOLS,
};
pub use types::{Action, ActionRecord};
