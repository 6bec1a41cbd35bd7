//! Mark balance invariant: X has as many marks as O, or one more.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: players alternate starting with X.
///
/// Every reachable board has `count(X) - count(O)` equal to 0 or 1.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
