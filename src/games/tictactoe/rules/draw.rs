//! Terminal and draw detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, Square};
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}

/// Checks if the game is over: someone has won or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Checks if the game ended without a winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

/// Summarizes the board as a game status.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
