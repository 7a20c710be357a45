//! Structured actions.
//!
//! Two shapes exist, one per phase:
//! - `Placement`: the mover drops both workers on two distinct cells
//! - `MoveBuild`: worker `w` (scan-order index) steps to `to`, then builds on `build`
//!
//! Structured actions name absolute cells. The dense integer encoding used by
//! search code lives in `codec`.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A complete structured action.
///
/// ## Example
///
/// ```
/// use santorini_engine::action::Action;
///
/// let place = Action::placement(3, 11);
/// assert!(place.is_placement());
///
/// let step = Action::move_build(1, 12, 7);
/// assert_eq!(step.destination(), Some(12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place both workers. Always `first < second`.
    Placement { first: usize, second: usize },

    /// Move worker `worker` to `to`, then raise `build` by one floor.
    MoveBuild {
        worker: usize,
        to: usize,
        build: usize,
    },
}

impl Action {
    /// Placement on two cells, normalized so the lower index comes first.
    #[must_use]
    pub fn placement(a: usize, b: usize) -> Self {
        Action::Placement {
            first: a.min(b),
            second: a.max(b),
        }
    }

    /// Move-and-build action.
    #[must_use]
    pub fn move_build(worker: usize, to: usize, build: usize) -> Self {
        Action::MoveBuild { worker, to, build }
    }

    /// Whether this is a placement.
    #[must_use]
    pub fn is_placement(&self) -> bool {
        matches!(self, Action::Placement { .. })
    }

    /// Destination cell of a move, `None` for placements.
    #[must_use]
    pub fn destination(&self) -> Option<usize> {
        match *self {
            Action::MoveBuild { to, .. } => Some(to),
            Action::Placement { .. } => None,
        }
    }

    /// Build cell of a move, `None` for placements.
    #[must_use]
    pub fn build_cell(&self) -> Option<usize> {
        match *self {
            Action::MoveBuild { build, .. } => Some(build),
            Action::Placement { .. } => None,
        }
    }
}

/// An applied action, as kept in the state's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// Encoded action id.
    pub action: usize,

    /// Zero-based ply at which the action was applied.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: usize, ply: u32) -> Self {
        Self {
            player,
            action,
            ply,
        }
    }
}
