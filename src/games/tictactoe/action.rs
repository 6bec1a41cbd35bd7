//! Turn order, legal moves and move application.
//!
//! These are pure functions over [`Board`] values. Whose turn it is is never
//! stored: it follows from the number of marks on the board, since X moves
//! first and players alternate.

use super::{Board, Move, Player, Square};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// O moves when X has more marks on the board, otherwise X moves.
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every move whose square is empty.
///
/// The set is empty iff the board is full. Callers must not rely on the
/// iteration order.
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    Move::all().filter(|&mv| board.is_empty(mv)).collect()
}

/// Returns the board that results from the current player marking `mv`.
///
/// The input board is never modified.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
#[instrument(level = "trace", skip(board, mv), fields(mv = %mv))]
pub fn apply(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if !board.is_empty(mv) {
        return Err(MoveError::SquareOccupied(mv));
    }
    Ok(successor(board, mv))
}

/// Marks an empty square for the current player without checking it.
pub(super) fn successor(board: &Board, mv: Move) -> Board {
    debug_assert!(board.is_empty(mv), "successor of occupied square {mv}");
    board.with(mv, Square::Occupied(current_player(board)))
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Move),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(current_player(&initial_state()), Player::X);
    }

    #[test]
    fn test_players_alternate() {
        let board = apply(&initial_state(), mv(1, 1)).unwrap();
        assert_eq!(current_player(&board), Player::O);
        assert_eq!(board.get(mv(1, 1)), Square::Occupied(Player::X));

        let board = apply(&board, mv(0, 0)).unwrap();
        assert_eq!(current_player(&board), Player::X);
        assert_eq!(board.get(mv(0, 0)), Square::Occupied(Player::O));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let board = apply(&initial_state(), mv(2, 1)).unwrap();
        assert_eq!(
            apply(&board, mv(2, 1)),
            Err(MoveError::SquareOccupied(mv(2, 1)))
        );
    }

    #[test]
    fn test_legal_moves_shrink() {
        let board = initial_state();
        assert_eq!(legal_moves(&board).len(), 9);

        let board = apply(&board, mv(0, 2)).unwrap();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&mv(0, 2)));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            MoveError::SquareOccupied(mv(1, 0)).to_string(),
            "Square (1, 0) is already occupied"
        );
    }
}
