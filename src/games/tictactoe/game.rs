//! Game driver: a board plus the moves that led to it.

use super::action::{MoveError, apply, current_player};
use super::invariants::check_board;
use super::rules::status;
use super::search::Searcher;
use super::{Board, GameStatus, Move, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game with move history.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues a game from an arbitrary position.
    ///
    /// The history starts empty.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played since the game was created.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        status(&self.board)
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        current_player(&self.board)
    }

    /// Plays a move for the player to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, and
    /// [`MoveError::SquareOccupied`] for a marked square.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status() != GameStatus::InProgress {
            warn!("Move rejected, game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.to_move();
        self.board = apply(&self.board, mv)?;
        self.history.push(mv);

        if cfg!(debug_assertions)
            && let Err(violations) = check_board(&self.board)
        {
            for violation in &violations {
                warn!(%violation, "Board invariant violated");
            }
        }

        let status = self.status();
        debug!(%player, %status, "Move played");
        Ok(status)
    }

    /// Plays the searcher's choice for the player to move.
    ///
    /// Returns the move played, or `None` if the game is over.
    pub fn play_optimal(&mut self, searcher: &mut Searcher) -> Option<Move> {
        let mv = searcher.best_move(&self.board)?;
        let played = self.play(mv);
        debug_assert!(played.is_ok(), "searcher chose unplayable {mv}: {played:?}");
        played.ok()?;
        Some(mv)
    }

    /// Lets the searcher play both sides until the game ends.
    #[instrument(skip_all)]
    pub fn play_out(&mut self, searcher: &mut Searcher) -> GameStatus {
        while self.play_optimal(searcher).is_some() {}
        let status = self.status();
        info!(%status, moves = self.history.len(), "Game finished");
        status
    }
}
