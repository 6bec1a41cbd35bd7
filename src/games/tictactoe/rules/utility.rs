//! Payoff of a finished game.

use super::super::{Board, Player};
use super::win::winner;

/// Payoff when X has won.
pub const X_WINS: i32 = 1;
/// Payoff when O has won.
pub const O_WINS: i32 = -1;
/// Payoff of a draw.
pub const DRAW: i32 = 0;

/// Returns the payoff of a terminal board from X's point of view.
///
/// `1` if X has won, `-1` if O has won, `0` otherwise. Only meaningful on a
/// terminal board: an unfinished board also yields `0`, which says nothing
/// about who is ahead.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
