//! Single winner invariant: the game stops at the first completed line.

use super::super::rules::has_line;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X and O never both own a complete line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_winner_holds() {
        assert!(SingleWinner::holds(&"XXX/OO./...".parse().unwrap()));
    }

    #[test]
    fn test_two_winners_violates() {
        assert!(!SingleWinner::holds(&"XXX/OOO/...".parse().unwrap()));
    }
}
