//! The game state machine.
//!
//! `SantoriniState` owns the board, the player to move, the placement
//! counter and the move history. Everything else (legal ids, terminal
//! result) is derived after each transition and memoized until the next.
//!
//! The engine is forward-only: there is no undo. Tree search clones states
//! instead, which is cheap because the board is inline and the history is a
//! persistent `im::Vector`.

use std::fmt;

use im::Vector;
use tracing::debug;

use crate::action::{format_action, parse_action, Action, ActionCodec, ActionRecord};
use crate::board::Board;
use crate::core::{EngineError, PlayerId, Result, SantoriniConfig, NUM_PLAYERS, WORKERS_PER_PLAYER};
use crate::nn::{board_to_string, EncodedState, SantoriniEncoder, StateEncoder};
use crate::rules::{
    classify_terminal, compute_legal_actions, GameResult, Phase, SequentialGame, TOTAL_PLACEMENTS,
};

/// Complete Santorini game state.
///
/// ## Example
///
/// ```
/// use santorini_engine::core::SantoriniConfig;
/// use santorini_engine::game::SantoriniState;
/// use santorini_engine::rules::SequentialGame;
///
/// let mut state = SantoriniState::new(SantoriniConfig::default()).unwrap();
/// assert_eq!(state.legal_actions().len(), 300);
///
/// state.apply_action(0).unwrap();
/// assert_eq!(state.move_number(), 1);
/// assert_eq!(state.history_string(), "0");
/// ```
#[derive(Clone, Debug)]
pub struct SantoriniState {
    config: SantoriniConfig,
    codec: ActionCodec,
    board: Board,
    to_move: PlayerId,
    workers_placed: usize,
    move_number: u32,

    // Derived after every transition.
    legal: Vec<usize>,
    result: Option<GameResult>,

    history: Vector<ActionRecord>,
}

impl SantoriniState {
    /// Fresh game: empty board, player 0 to place.
    pub fn new(config: SantoriniConfig) -> Result<Self> {
        config.validate()?;
        let mut state = Self {
            config,
            codec: ActionCodec::new(&config),
            board: Board::new(&config),
            to_move: PlayerId::FIRST,
            workers_placed: 0,
            move_number: 0,
            legal: Vec::new(),
            result: None,
            history: Vector::new(),
        };
        state.refresh()?;
        Ok(state)
    }

    /// Start from an arbitrary position.
    ///
    /// The placement counter is inferred from the workers on the board. The
    /// position must be reachable by the placement order: no workers, only
    /// player 0's two, or both players' two.
    pub fn from_board(config: SantoriniConfig, board: Board, to_move: PlayerId) -> Result<Self> {
        config.validate()?;
        if board.size() != config.board_size || board.max_floors() != config.max_floors {
            return Err(EngineError::InvalidBoard(format!(
                "board is {}x{} capped at {}, config wants {}x{} capped at {}",
                board.size(),
                board.size(),
                board.max_floors(),
                config.board_size,
                config.board_size,
                config.max_floors
            )));
        }

        let first = board.workers(PlayerId::FIRST).len();
        let second = board.workers(PlayerId::SECOND).len();
        let workers_placed = match (first, second) {
            (0, 0) if to_move == PlayerId::FIRST => 0,
            (WORKERS_PER_PLAYER, 0) if to_move == PlayerId::SECOND => WORKERS_PER_PLAYER,
            (WORKERS_PER_PLAYER, WORKERS_PER_PLAYER) => TOTAL_PLACEMENTS,
            _ => {
                return Err(EngineError::InvalidBoard(format!(
                    "worker counts ({first}, {second}) with player {to_move} to move cannot arise from placement"
                )))
            }
        };

        let mut state = Self {
            config,
            codec: ActionCodec::new(&config),
            board,
            to_move,
            workers_placed,
            move_number: 0,
            legal: Vec::new(),
            result: None,
            history: Vector::new(),
        };
        state.refresh()?;
        Ok(state)
    }

    // === Accessors ===

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &SantoriniConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Action codec for this configuration.
    #[must_use]
    pub fn codec(&self) -> &ActionCodec {
        &self.codec
    }

    /// Player whose turn it is, even once the game is over.
    #[must_use]
    pub fn player_to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Workers placed so far, `0..=4`.
    #[must_use]
    pub fn workers_placed(&self) -> usize {
        self.workers_placed
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_workers_placed(self.workers_placed)
    }

    /// Number of actions applied.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Every action applied so far.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Applied action ids, comma-separated.
    #[must_use]
    pub fn history_string(&self) -> String {
        self.history
            .iter()
            .map(|record| record.action.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Structured form of the current legal actions, in id order.
    pub fn legal_structured_actions(&self) -> Result<Vec<Action>> {
        self.legal
            .iter()
            .map(|&id| self.codec.decode(id, &self.board, self.to_move))
            .collect()
    }

    // === Transitions ===

    /// Apply a legal action id.
    ///
    /// Errors leave the state untouched.
    pub fn apply(&mut self, id: usize) -> Result<()> {
        if self.result.is_some() {
            return Err(EngineError::GameOver);
        }
        if id >= self.codec.num_actions() {
            return Err(EngineError::ActionOutOfRange {
                action: id,
                num_actions: self.codec.num_actions(),
            });
        }
        if self.legal.binary_search(&id).is_err() {
            return Err(EngineError::IllegalAction { action: id });
        }

        let player = self.to_move;
        let action = self.codec.decode(id, &self.board, player)?;
        debug!(player = player.0, action = id, ?action, "applying action");

        match action {
            Action::Placement { first, second } => {
                self.board.set_occupant(first, Some(player));
                self.board.set_occupant(second, Some(player));
                self.workers_placed += WORKERS_PER_PLAYER;
            }
            Action::MoveBuild { worker, to, build } => {
                let from = self
                    .board
                    .worker(player, worker)
                    .ok_or(EngineError::MissingWorker { player, worker })?;
                self.board.set_occupant(from, None);
                self.board.set_occupant(to, Some(player));
                let height = self.board.height(build);
                self.board.set_height(build, height + 1);
            }
        }

        self.history
            .push_back(ActionRecord::new(player, id, self.move_number));
        self.move_number += 1;
        self.to_move = player.opponent();
        self.refresh()
    }

    /// Recompute the legal ids and terminal result for the current position.
    fn refresh(&mut self) -> Result<()> {
        let phase = self.phase();
        let actions = compute_legal_actions(&self.board, self.to_move, self.workers_placed);
        let legal = actions
            .iter()
            .map(|action| self.codec.encode(action, &self.board, self.to_move))
            .collect::<Result<Vec<_>>>()?;
        debug_assert!(legal.windows(2).all(|pair| pair[0] < pair[1]));

        self.result = classify_terminal(&self.board, self.to_move, phase, legal.len());
        self.legal = if self.result.is_some() { Vec::new() } else { legal };
        Ok(())
    }
}

impl fmt::Display for SantoriniState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&board_to_string(&self.board))
    }
}

impl SequentialGame for SantoriniState {
    fn current_player(&self) -> Option<PlayerId> {
        self.result.is_none().then_some(self.to_move)
    }

    fn legal_actions(&self) -> &[usize] {
        &self.legal
    }

    fn apply_action(&mut self, action: usize) -> Result<()> {
        self.apply(action)
    }

    fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn returns(&self) -> [f64; NUM_PLAYERS] {
        self.result
            .map_or([0.0; NUM_PLAYERS], |result| result.returns())
    }

    fn num_distinct_actions(&self) -> usize {
        self.codec.num_actions()
    }

    fn action_to_string(&self, player: PlayerId, action: usize) -> Result<String> {
        let structured = self.codec.decode(action, &self.board, player)?;
        format_action(&structured, &self.board, player)
    }

    fn string_to_action(&self, player: PlayerId, text: &str) -> Result<usize> {
        let structured = parse_action(text, &self.board, player)?;
        self.codec.encode(&structured, &self.board, player)
    }

    fn information_state_string(&self, _player: PlayerId) -> String {
        board_to_string(&self.board)
    }

    fn observation_string(&self, _player: PlayerId) -> String {
        board_to_string(&self.board)
    }

    fn observation_tensor(&self, player: PlayerId) -> EncodedState {
        SantoriniEncoder::new(self.config).encode(&self.board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> SantoriniState {
        SantoriniState::new(SantoriniConfig::default()).unwrap()
    }

    fn place(state: &mut SantoriniState, a: usize, b: usize) {
        let id = state.codec().placement_rank(a.min(b), a.max(b));
        state.apply(id).unwrap();
    }

    /// Both players placed: player 0 on 6 and 18, player 1 on 8 and 16.
    fn placed_game() -> SantoriniState {
        let mut state = new_game();
        place(&mut state, 6, 18);
        place(&mut state, 8, 16);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = new_game();

        assert_eq!(state.current_player(), Some(PlayerId::FIRST));
        assert_eq!(state.phase(), Phase::Placement);
        assert_eq!(state.legal_actions(), (0..300).collect::<Vec<_>>().as_slice());
        assert!(!state.is_terminal());
        assert_eq!(state.returns(), [0.0, 0.0]);
        assert_eq!(state.move_number(), 0);
    }

    #[test]
    fn test_placement_flow() {
        let mut state = new_game();
        place(&mut state, 6, 18);

        assert_eq!(state.current_player(), Some(PlayerId::SECOND));
        assert_eq!(state.workers_placed(), 2);
        assert_eq!(state.board().occupant(6), Some(PlayerId::FIRST));
        assert_eq!(state.board().occupant(18), Some(PlayerId::FIRST));
        assert_eq!(state.legal_actions().len(), 253);

        place(&mut state, 8, 16);
        assert_eq!(state.phase(), Phase::Movement);
        assert_eq!(state.current_player(), Some(PlayerId::FIRST));
        assert!(state
            .legal_actions()
            .iter()
            .all(|&id| id >= state.codec().num_placement_actions()));
    }

    #[test]
    fn test_placement_onto_occupied_cell_is_illegal() {
        let mut state = new_game();
        place(&mut state, 6, 18);

        let id = state.codec().placement_rank(6, 7);
        assert_eq!(state.apply(id), Err(EngineError::IllegalAction { action: id }));
        assert_eq!(state.current_player(), Some(PlayerId::SECOND));
        assert_eq!(state.move_number(), 1);
    }

    #[test]
    fn test_move_and_build() {
        let mut state = placed_game();
        let id = state
            .string_to_action(PlayerId::FIRST, "0[(1, 1)->(1, 2)]@(0, 2)")
            .unwrap();

        state.apply(id).unwrap();

        let board = state.board();
        assert_eq!(board.occupant(6), None);
        assert_eq!(board.occupant(7), Some(PlayerId::FIRST));
        assert_eq!(board.height(2), 1);
        assert_eq!(state.current_player(), Some(PlayerId::SECOND));
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.history()[2].player, PlayerId::FIRST);
        assert_eq!(state.history()[2].ply, 2);
    }

    #[test]
    fn test_rejected_ids() {
        let mut state = placed_game();

        assert_eq!(
            state.apply(428),
            Err(EngineError::ActionOutOfRange {
                action: 428,
                num_actions: 428
            })
        );
        assert_eq!(state.apply(0), Err(EngineError::IllegalAction { action: 0 }));
        assert_eq!(state.move_number(), 2);
    }

    #[test]
    fn test_climb_to_top_floor_wins() {
        let config = SantoriniConfig::default();
        let mut board = Board::new(&config);
        board.set_occupant(12, Some(PlayerId::FIRST));
        board.set_occupant(0, Some(PlayerId::FIRST));
        board.set_occupant(4, Some(PlayerId::SECOND));
        board.set_occupant(24, Some(PlayerId::SECOND));
        board.set_height(12, 2);
        board.set_height(13, 3);

        let mut state = SantoriniState::from_board(config, board, PlayerId::FIRST).unwrap();
        let id = state
            .string_to_action(PlayerId::FIRST, "0[(2, 2)->(2, 3)]@(2, 2)")
            .unwrap();
        state.apply(id).unwrap();

        assert!(state.is_terminal());
        assert_eq!(state.current_player(), None);
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.returns(), [1.0, -1.0]);
        assert_eq!(state.apply(id), Err(EngineError::GameOver));
    }

    #[test]
    fn test_boxed_in_player_loses() {
        let config = SantoriniConfig::default();
        let mut board = Board::new(&config);
        board.set_occupant(0, Some(PlayerId::SECOND));
        board.set_occupant(1, Some(PlayerId::SECOND));
        board.set_occupant(5, Some(PlayerId::FIRST));
        board.set_occupant(6, Some(PlayerId::FIRST));
        for pos in [2, 7, 10, 11, 12] {
            board.set_height(pos, 3);
        }

        let state = SantoriniState::from_board(config, board, PlayerId::SECOND).unwrap();

        assert!(state.is_terminal());
        assert_eq!(state.returns(), [1.0, -1.0]);
        assert_eq!(
            state.result().map(|r| r.reason),
            Some(crate::rules::TerminalReason::NoLegalActions)
        );
    }

    #[test]
    fn test_from_board_rejects_unreachable_positions() {
        let config = SantoriniConfig::default();

        let mut board = Board::new(&config);
        board.set_occupant(3, Some(PlayerId::SECOND));
        board.set_occupant(4, Some(PlayerId::SECOND));
        assert!(matches!(
            SantoriniState::from_board(config, board, PlayerId::FIRST),
            Err(EngineError::InvalidBoard(_))
        ));

        let empty = Board::new(&config);
        assert!(matches!(
            SantoriniState::from_board(config, empty, PlayerId::SECOND),
            Err(EngineError::InvalidBoard(_))
        ));

        let small = Board::new(&SantoriniConfig::new(4, 3).unwrap());
        assert!(matches!(
            SantoriniState::from_board(config, small, PlayerId::FIRST),
            Err(EngineError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let state = placed_game();
        let id = state.legal_actions()[0];

        let child = state.child(id).unwrap();

        assert_eq!(state.move_number(), 2);
        assert_eq!(child.move_number(), 3);
        assert_ne!(state.board(), child.board());
    }

    #[test]
    fn test_action_strings_round_trip() {
        let state = placed_game();

        for &id in state.legal_actions() {
            let text = state.action_to_string(PlayerId::FIRST, id).unwrap();
            assert_eq!(state.string_to_action(PlayerId::FIRST, &text), Ok(id));
        }
    }

    #[test]
    fn test_legal_structured_actions_match_generator() {
        let state = placed_game();

        let structured = state.legal_structured_actions().unwrap();
        let generated = compute_legal_actions(state.board(), PlayerId::FIRST, 4);
        assert_eq!(structured, generated);
    }

    #[test]
    fn test_observation_views() {
        let state = placed_game();

        assert_eq!(
            state.observation_string(PlayerId::FIRST),
            state.observation_string(PlayerId::SECOND)
        );
        assert_eq!(
            state.information_state_string(PlayerId::FIRST),
            state.to_string()
        );
        let tensor = state.observation_tensor(PlayerId::SECOND);
        assert_eq!(tensor.shape, vec![6, 5, 5]);
        assert_eq!(tensor.plane(4)[8], 1.0);
        assert_eq!(tensor.plane(5)[6], 1.0);
    }

    #[test]
    fn test_history_string() {
        let state = placed_game();
        let first = state.codec().placement_rank(6, 18);
        let second = state.codec().placement_rank(8, 16);

        assert_eq!(state.history_string(), format!("{first}, {second}"));
    }
}
