//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use strictly_minimax::{
    Board, Move, Player, apply, current_player, initial_state, is_terminal, legal_moves, utility,
};

/// Shorthand for an on-board move.
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("Move on the board")
}

/// Every board reachable from the empty board by legal play.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if is_terminal(&board) {
            continue;
        }
        for m in legal_moves(&board) {
            stack.push(apply(&board, m).expect("Legal move"));
        }
    }
    boards
}

/// Plain minimax without pruning, memoized by board.
pub struct Oracle {
    values: HashMap<Board, i32>,
}

impl Oracle {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn value(&mut self, board: &Board) -> i32 {
        if let Some(&value) = self.values.get(board) {
            return value;
        }
        let value = if is_terminal(board) {
            utility(board)
        } else {
            let children = legal_moves(board)
                .into_iter()
                .map(|m| apply(board, m).expect("Legal move"))
                .collect::<Vec<_>>();
            let values = children.iter().map(|child| self.value(child)).collect::<Vec<_>>();
            match current_player(board) {
                Player::X => values.into_iter().max().expect("Non-terminal board has moves"),
                Player::O => values.into_iter().min().expect("Non-terminal board has moves"),
            }
        };
        self.values.insert(*board, value);
        value
    }
}
