//! Human-readable action notation.
//!
//! Two board-resolved formats, both prefixed with the mover:
//!
//! ```text
//! 0(0, 1) 0(2, 3)           player 0 places on (0,1) and (2,3)
//! 1[(1, 1)->(2, 2)]@(3, 3)  player 1 moves (1,1) to (2,2), builds on (3,3)
//! ```
//!
//! and one compact, board-independent form for movement ids that only names
//! the worker and the two directions as numeric-keypad digits:
//!
//! ```text
//! 0M6B2                     worker 0 steps right, builds below its new cell
//! ```

use super::codec::ActionCodec;
use super::types::Action;
use crate::board::Board;
use crate::core::{EngineError, PlayerId, Result};

/// Keypad digit for each entry of `DIRECTIONS`.
pub const DIRECTION_SYMBOLS: [char; 8] = ['7', '8', '9', '4', '6', '1', '2', '3'];

/// Render a structured action for `player` on `board`.
pub fn format_action(action: &Action, board: &Board, player: PlayerId) -> Result<String> {
    let cell = |pos: usize| {
        let (row, col) = board.coord(pos);
        format!("({row}, {col})")
    };

    match *action {
        Action::Placement { first, second } => Ok(format!(
            "{player}{} {player}{}",
            cell(first),
            cell(second)
        )),
        Action::MoveBuild { worker, to, build } => {
            let from = board
                .worker(player, worker)
                .ok_or(EngineError::MissingWorker { player, worker })?;
            Ok(format!(
                "{player}[{}->{}]@{}",
                cell(from),
                cell(to),
                cell(build)
            ))
        }
    }
}

/// Parse either board-resolved format back into a structured action.
pub fn parse_action(text: &str, board: &Board, player: PlayerId) -> Result<Action> {
    let text = text.trim();
    if text.contains("->") {
        parse_move_build(text, board, player)
    } else {
        parse_placement(text, board, player)
    }
}

/// Compact `<w>M<d>B<d>` form of a movement id. `None` for placement ids.
#[must_use]
pub fn direction_notation(codec: &ActionCodec, id: usize) -> Option<String> {
    let (worker, move_dir, build_dir) = codec.movement_parts(id)?;
    Some(format!(
        "{worker}M{}B{}",
        DIRECTION_SYMBOLS[move_dir], DIRECTION_SYMBOLS[build_dir]
    ))
}

/// Parse the compact `<w>M<d>B<d>` form into a movement id.
pub fn parse_direction_notation(codec: &ActionCodec, text: &str) -> Result<usize> {
    let chars: Vec<char> = text.trim().chars().collect();
    let malformed = || EngineError::ParseAction(text.to_string());

    if chars.len() != 5 || chars[1] != 'M' || chars[3] != 'B' {
        return Err(malformed());
    }
    let worker = chars[0]
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|&w| w < crate::core::WORKERS_PER_PLAYER)
        .ok_or_else(malformed)?;
    let symbol = |c: char| DIRECTION_SYMBOLS.iter().position(|&s| s == c);
    let move_dir = symbol(chars[2]).ok_or_else(malformed)?;
    let build_dir = symbol(chars[4]).ok_or_else(malformed)?;

    Ok(codec.movement_id(worker, move_dir, build_dir))
}

fn parse_placement(text: &str, board: &Board, player: PlayerId) -> Result<Action> {
    let malformed = || EngineError::ParseAction(text.to_string());

    let split = text.find(") ").ok_or_else(malformed)? + 1;
    let first = parse_player_cell(&text[..split], board, player, text)?;
    let second = parse_player_cell(text[split..].trim_start(), board, player, text)?;
    if first == second {
        return Err(malformed());
    }

    Ok(Action::placement(first, second))
}

fn parse_move_build(text: &str, board: &Board, player: PlayerId) -> Result<Action> {
    let malformed = || EngineError::ParseAction(text.to_string());

    let (prefix, rest) = text.split_once('[').ok_or_else(malformed)?;
    check_player(prefix, player, text)?;
    let (from, rest) = rest.split_once("->").ok_or_else(malformed)?;
    let (to, build) = rest.split_once("]@").ok_or_else(malformed)?;

    let from = parse_cell(from, board).ok_or_else(malformed)?;
    let to = parse_cell(to, board).ok_or_else(malformed)?;
    let build = parse_cell(build, board).ok_or_else(malformed)?;

    let worker = board
        .workers(player)
        .iter()
        .position(|&pos| pos == from)
        .ok_or_else(|| {
            EngineError::ParseAction(format!("{text}: no worker of player {player} at origin"))
        })?;

    Ok(Action::move_build(worker, to, build))
}

/// `"<p>(r, c)"` to a cell index, checking the player prefix.
fn parse_player_cell(part: &str, board: &Board, player: PlayerId, text: &str) -> Result<usize> {
    let open = part
        .find('(')
        .ok_or_else(|| EngineError::ParseAction(text.to_string()))?;
    check_player(&part[..open], player, text)?;
    parse_cell(&part[open..], board).ok_or_else(|| EngineError::ParseAction(text.to_string()))
}

fn check_player(prefix: &str, player: PlayerId, text: &str) -> Result<()> {
    match prefix.trim().parse::<u8>() {
        Ok(id) if id == player.0 => Ok(()),
        _ => Err(EngineError::ParseAction(format!(
            "{text}: expected mover prefix {player}"
        ))),
    }
}

/// `"(r, c)"` to a cell index.
fn parse_cell(text: &str, board: &Board) -> Option<usize> {
    let inner = text.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (row, col) = inner.split_once(',')?;
    board.index(row.trim().parse().ok()?, col.trim().parse().ok()?)
}
