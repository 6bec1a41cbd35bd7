//! Tic-tac-toe rules and optimal play.

mod action;
mod game;
mod invariants;
mod rules;
mod search;
mod types;

pub use action::{MoveError, apply, current_player, initial_state, legal_moves};
pub use game::Game;
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance, SingleWinner,
    WinnerConsistent, check_board,
};
pub use rules::{has_line, is_draw, is_full, is_terminal, status, utility, winner, winning_lines};
pub use search::{SearchReport, Searcher, best_move, game_value};
pub use types::{Board, BoardParseError, GameStatus, Move, Player, Square};

/// Alias for clarity when talking about cell contents.
pub type Mark = Player;
