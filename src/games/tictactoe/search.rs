//! Exhaustive minimax search with pruning.
//!
//! The game tree is at most nine plies deep, so the search always runs to
//! the end of the game and scores leaves with [`utility`]: there is no depth
//! limit and no heuristic evaluation.
//!
//! `max_value` and `min_value` call each other down
//! the tree. Each takes a bound: the value the parent node can already
//! guarantee through a sibling it has searched. A maximizing node stops as
//! soon as it exceeds the bound of its minimizing parent, and a minimizing
//! node stops as soon as it falls below the bound of its maximizing parent,
//! because the parent will not pick it either way. A node hands its own
//! running value down as the bound for its children, the same way the root
//! does.

use super::action::{current_player, legal_moves, successor};
use super::rules::{is_terminal, utility};
use super::{Board, Move, Player};
use crate::config::{SearchConfig, TieBreak};
use derive_getters::Getters;
use tracing::{debug, instrument, trace};

/// Result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchReport {
    /// Optimal move for the player to move.
    best_move: Move,
    /// Exact game value of the searched board under optimal play.
    value: i32,
    /// Number of positions visited.
    nodes: u64,
}

/// Minimax searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Returns the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the optimal move for the player to move, or `None` if the
    /// game is over.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).map(|report| report.best_move)
    }

    /// Searches the board to the end of the game.
    ///
    /// Returns `None` on a terminal board.
    #[instrument(skip(self, board), fields(tie_break = %self.config.tie_break()))]
    pub fn search(&mut self, board: &Board) -> Option<SearchReport> {
        self.nodes = 1;
        if is_terminal(board) {
            debug!("Board is terminal, nothing to search");
            return None;
        }

        let mover = current_player(board);
        let strict = *self.config.tie_break() == TieBreak::First;
        let mut best = None;

        let bound = match mover {
            Player::X => {
                let mut bound = i32::MIN;
                for mv in legal_moves(board) {
                    let score = self.min_value(&successor(board, mv), bound);
                    trace!(%mv, score, "Root move scored");
                    if score > bound || (!strict && score == bound) {
                        bound = score;
                        best = Some(mv);
                    }
                }
                bound
            }
            Player::O => {
                let mut bound = i32::MAX;
                for mv in legal_moves(board) {
                    let score = self.max_value(&successor(board, mv), bound);
                    trace!(%mv, score, "Root move scored");
                    if score < bound || (!strict && score == bound) {
                        bound = score;
                        best = Some(mv);
                    }
                }
                bound
            }
        };

        let report = best.map(|best_move| SearchReport {
            best_move,
            value: bound,
            nodes: self.nodes,
        });
        debug!(?mover, ?report, "Search finished");
        report
    }

    /// Value of a board where X is to move.
    ///
    /// Returns early, with a value above `bound`, once the minimizing parent
    /// would reject this board anyway.
    fn max_value(&mut self, board: &Board, bound: i32) -> i32 {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut v = i32::MIN;
        for mv in legal_moves(board) {
            v = v.max(self.min_value(&successor(board, mv), v));
            if v > bound {
                return v;
            }
        }
        v
    }

    /// Value of a board where O is to move.
    ///
    /// Returns early, with a value below `bound`, once the maximizing parent
    /// would reject this board anyway.
    fn min_value(&mut self, board: &Board, bound: i32) -> i32 {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut v = i32::MAX;
        for mv in legal_moves(board) {
            v = v.min(self.max_value(&successor(board, mv), v));
            if v < bound {
                return v;
            }
        }
        v
    }
}

/// Returns the optimal move for the player to move, or `None` if the game
/// is over.
///
/// Uses the default configuration ([`TieBreak::Last`]). When several moves
/// are equally good, which one is returned is not part of the contract.
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::default().best_move(board)
}

/// Returns the value of the board under optimal play by both sides.
///
/// `1` means X can force a win, `-1` that O can, `0` a draw.
pub fn game_value(board: &Board) -> i32 {
    Searcher::default()
        .search(board)
        .map_or_else(|| utility(board), |report| report.value)
}
