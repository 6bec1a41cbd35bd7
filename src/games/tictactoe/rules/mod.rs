//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the invariants can share them.

pub mod draw;
pub mod utility;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal, status};
pub use utility::utility;
pub use win::{has_line, winner, winning_lines};
