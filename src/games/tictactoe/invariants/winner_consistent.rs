//! Winner consistency invariant: the game stops on the winning move.

use super::super::rules::has_line;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: a completed line was the last move played.
///
/// X wins on its own move, leaving X one mark ahead. O wins on its own
/// move, leaving the counts equal. No mark follows a win.
pub struct WinnerConsistent;

impl Invariant<Board> for WinnerConsistent {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        (!has_line(board, Player::X) || x == o + 1) && (!has_line(board, Player::O) || x == o)
    }

    fn description() -> &'static str {
        "No mark was placed after a player completed a line"
    }
}
