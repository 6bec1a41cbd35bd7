//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Board, TieBreak};

/// Strictly Minimax - optimal tic-tac-toe moves
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Solve tic-tac-toe positions by minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML search configuration
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Override the tie-break policy (first or last)
    #[arg(long, global = true)]
    pub tie_break: Option<TieBreak>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    Best {
        /// Board as nine cells, row-major (X, O, or . for empty), e.g. "XO./.X./..."
        board: Board,
    },

    /// Let the search play both sides to the end of the game
    Play {
        /// Starting board; empty if not given
        board: Option<Board>,
    },
}
