//! Strictly Minimax - optimal tic-tac-toe play
//!
//! This library solves tic-tac-toe positions by exhaustive minimax search
//! with pruning. Boards are plain values; every function is pure.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s, with the player to move derived
//!   from the mark counts
//! - **Rules**: win, draw and terminal detection, and the [`utility`] payoff
//! - **Search**: [`best_move`] and [`Searcher`] for the optimal move
//! - **Game**: [`Game`] keeps a move history and can play itself out
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{apply, best_move, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(mv) = best_move(&board) {
//!     board = apply(&board, mv)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), strictly_minimax::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, SearchConfig, TieBreak};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, GameStatus, Mark, Move, MoveError, Player, Square,
};

// Crate-level exports - Rules
pub use games::tictactoe::{
    apply, current_player, has_line, initial_state, is_draw, is_full, is_terminal, legal_moves,
    status, utility, winner, winning_lines,
};

// Crate-level exports - Invariants
pub use games::tictactoe::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance, SingleWinner,
    WinnerConsistent, check_board,
};

// Crate-level exports - Search and play
pub use games::tictactoe::{Game, SearchReport, Searcher, best_move, game_value};
