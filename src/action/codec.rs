//! Dense integer encoding of structured actions.
//!
//! The action space is two ranges laid end to end:
//!
//! ```text
//! [0, C(N²,2))                 placement pairs (i, j), i < j, lexicographic rank
//! [C(N²,2), C(N²,2) + 2·D²)    worker · D² + move_dir · D + build_dir
//! ```
//!
//! Movement codes are relative: they name a worker by scan-order index and two
//! directions, not absolute cells. Turning a movement code into cells needs the
//! live board to find where that worker currently stands, so the same id
//! decodes to different cells in different positions. Both `encode` and
//! `decode` therefore take the board and the mover.

use super::types::Action;
use crate::board::{Board, DIRECTIONS};
use crate::core::{EngineError, PlayerId, Result, SantoriniConfig, WORKERS_PER_PLAYER};

const NUM_DIRECTIONS: usize = DIRECTIONS.len();

/// Encoder/decoder between `Action` and dense ids for one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionCodec {
    num_cells: usize,
    num_placement: usize,
    num_actions: usize,
}

impl ActionCodec {
    /// Codec for the given configuration.
    #[must_use]
    pub fn new(config: &SantoriniConfig) -> Self {
        Self {
            num_cells: config.num_cells(),
            num_placement: config.num_placement_actions(),
            num_actions: config.num_distinct_actions(),
        }
    }

    /// Total number of ids.
    #[must_use]
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Size of the placement range; movement ids start here.
    #[must_use]
    pub fn num_placement_actions(&self) -> usize {
        self.num_placement
    }

    /// Whether an id falls in the placement range.
    #[must_use]
    pub fn is_placement_id(&self, id: usize) -> bool {
        id < self.num_placement
    }

    /// Lexicographic rank of the pair `(first, second)`, `first < second`.
    #[must_use]
    pub fn placement_rank(&self, first: usize, second: usize) -> usize {
        debug_assert!(first < second && second < self.num_cells);
        first * (2 * self.num_cells - first - 1) / 2 + (second - first - 1)
    }

    /// Inverse of `placement_rank`.
    #[must_use]
    pub fn placement_pair(&self, rank: usize) -> Option<(usize, usize)> {
        if rank >= self.num_placement {
            return None;
        }
        let mut first = 0;
        let mut remaining = rank;
        loop {
            let row_len = self.num_cells - 1 - first;
            if remaining < row_len {
                return Some((first, first + 1 + remaining));
            }
            remaining -= row_len;
            first += 1;
        }
    }

    /// Movement id from its three components.
    #[must_use]
    pub fn movement_id(&self, worker: usize, move_dir: usize, build_dir: usize) -> usize {
        self.num_placement
            + worker * NUM_DIRECTIONS * NUM_DIRECTIONS
            + move_dir * NUM_DIRECTIONS
            + build_dir
    }

    /// `(worker, move_dir, build_dir)` of a movement id.
    #[must_use]
    pub fn movement_parts(&self, id: usize) -> Option<(usize, usize, usize)> {
        if id < self.num_placement || id >= self.num_actions {
            return None;
        }
        let local = id - self.num_placement;
        Some((
            local / (NUM_DIRECTIONS * NUM_DIRECTIONS),
            (local / NUM_DIRECTIONS) % NUM_DIRECTIONS,
            local % NUM_DIRECTIONS,
        ))
    }

    /// Encode a structured action against the current board.
    ///
    /// Only actions produced by the move generator for this board and mover
    /// are guaranteed to encode; anything else is rejected as malformed.
    pub fn encode(&self, action: &Action, board: &Board, player: PlayerId) -> Result<usize> {
        match *action {
            Action::Placement { first, second } => {
                if first >= second || second >= self.num_cells {
                    return Err(EngineError::MalformedAction(format!(
                        "placement ({first}, {second}) needs two distinct on-board cells in ascending order"
                    )));
                }
                Ok(self.placement_rank(first, second))
            }
            Action::MoveBuild { worker, to, build } => {
                if worker >= WORKERS_PER_PLAYER {
                    return Err(EngineError::MalformedAction(format!(
                        "worker index {worker} out of range"
                    )));
                }
                let from = board
                    .worker(player, worker)
                    .ok_or(EngineError::MissingWorker { player, worker })?;
                let move_dir = direction(board, from, to)?;
                let build_dir = direction(board, to, build)?;
                Ok(self.movement_id(worker, move_dir, build_dir))
            }
        }
    }

    /// Decode an id against the current board.
    ///
    /// Placement ids decode without looking at the board. Movement ids resolve
    /// the worker's current cell and fail if a step leaves the board.
    pub fn decode(&self, id: usize, board: &Board, player: PlayerId) -> Result<Action> {
        if id >= self.num_actions {
            return Err(EngineError::ActionOutOfRange {
                action: id,
                num_actions: self.num_actions,
            });
        }

        if let Some((first, second)) = self.placement_pair(id) {
            return Ok(Action::Placement { first, second });
        }

        let (worker, move_dir, build_dir) = self
            .movement_parts(id)
            .ok_or(EngineError::IllegalAction { action: id })?;
        let from = board
            .worker(player, worker)
            .ok_or(EngineError::MissingWorker { player, worker })?;
        let to = board
            .step(from, DIRECTIONS[move_dir])
            .ok_or(EngineError::IllegalAction { action: id })?;
        let build = board
            .step(to, DIRECTIONS[build_dir])
            .ok_or(EngineError::IllegalAction { action: id })?;

        Ok(Action::MoveBuild { worker, to, build })
    }
}

fn direction(board: &Board, from: usize, to: usize) -> Result<usize> {
    if from >= board.num_cells() || to >= board.num_cells() {
        return Err(EngineError::MalformedAction(format!(
            "cell out of range in step {from} -> {to}"
        )));
    }
    board.direction_between(from, to).ok_or_else(|| {
        EngineError::MalformedAction(format!("cells {from} and {to} are not adjacent"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ActionCodec, Board) {
        let config = SantoriniConfig::default();
        (ActionCodec::new(&config), Board::new(&config))
    }

    #[test]
    fn test_action_space_size() {
        let (codec, _) = setup();

        assert_eq!(codec.num_placement_actions(), 300);
        assert_eq!(codec.num_actions(), 428);
    }

    #[test]
    fn test_placement_rank_is_lexicographic() {
        let (codec, _) = setup();

        assert_eq!(codec.placement_rank(0, 1), 0);
        assert_eq!(codec.placement_rank(0, 24), 23);
        assert_eq!(codec.placement_rank(1, 2), 24);
        assert_eq!(codec.placement_rank(23, 24), 299);

        let mut expected = 0;
        for i in 0..25 {
            for j in (i + 1)..25 {
                assert_eq!(codec.placement_rank(i, j), expected);
                assert_eq!(codec.placement_pair(expected), Some((i, j)));
                expected += 1;
            }
        }
        assert_eq!(codec.placement_pair(300), None);
    }

    #[test]
    fn test_placement_decodes_without_workers() {
        let (codec, board) = setup();

        let action = codec.decode(24, &board, PlayerId::FIRST).unwrap();
        assert_eq!(action, Action::placement(1, 2));
    }

    #[test]
    fn test_movement_decode_depends_on_board() {
        let (codec, mut board) = setup();
        // worker 0, move (0, 1), build (1, 0)
        let id = codec.movement_id(0, 4, 6);
        assert_eq!(id, 300 + 4 * 8 + 6);

        board.set_occupant(6, Some(PlayerId::FIRST));
        board.set_occupant(20, Some(PlayerId::FIRST));
        assert_eq!(
            codec.decode(id, &board, PlayerId::FIRST).unwrap(),
            Action::move_build(0, 7, 12)
        );

        board.set_occupant(6, None);
        board.set_occupant(0, Some(PlayerId::FIRST));
        assert_eq!(
            codec.decode(id, &board, PlayerId::FIRST).unwrap(),
            Action::move_build(0, 1, 6)
        );
    }

    #[test]
    fn test_movement_round_trip() {
        let (codec, mut board) = setup();
        board.set_occupant(12, Some(PlayerId::SECOND));
        board.set_occupant(18, Some(PlayerId::SECOND));

        let action = Action::move_build(1, 13, 12);
        let id = codec.encode(&action, &board, PlayerId::SECOND).unwrap();
        assert_eq!(codec.movement_parts(id), Some((1, 1, 3)));
        assert_eq!(codec.decode(id, &board, PlayerId::SECOND).unwrap(), action);
    }

    #[test]
    fn test_decode_out_of_range() {
        let (codec, board) = setup();

        assert_eq!(
            codec.decode(428, &board, PlayerId::FIRST),
            Err(EngineError::ActionOutOfRange {
                action: 428,
                num_actions: 428
            })
        );
    }

    #[test]
    fn test_decode_step_off_board() {
        let (codec, mut board) = setup();
        board.set_occupant(0, Some(PlayerId::FIRST));
        board.set_occupant(24, Some(PlayerId::FIRST));

        // worker 0 at the corner stepping up-left
        let id = codec.movement_id(0, 0, 7);
        assert_eq!(
            codec.decode(id, &board, PlayerId::FIRST),
            Err(EngineError::IllegalAction { action: id })
        );
    }

    #[test]
    fn test_decode_missing_worker() {
        let (codec, board) = setup();
        let id = codec.movement_id(1, 0, 0);

        assert_eq!(
            codec.decode(id, &board, PlayerId::FIRST),
            Err(EngineError::MissingWorker {
                player: PlayerId::FIRST,
                worker: 1
            })
        );
    }

    #[test]
    fn test_encode_rejects_malformed() {
        let (codec, mut board) = setup();
        board.set_occupant(12, Some(PlayerId::FIRST));

        let same_cell = Action::Placement {
            first: 3,
            second: 3,
        };
        assert!(matches!(
            codec.encode(&same_cell, &board, PlayerId::FIRST),
            Err(EngineError::MalformedAction(_))
        ));

        let far = Action::move_build(0, 14, 13);
        assert!(matches!(
            codec.encode(&far, &board, PlayerId::FIRST),
            Err(EngineError::MalformedAction(_))
        ));

        let bad_worker = Action::move_build(2, 13, 12);
        assert!(matches!(
            codec.encode(&bad_worker, &board, PlayerId::FIRST),
            Err(EngineError::MalformedAction(_))
        ));
    }
}
