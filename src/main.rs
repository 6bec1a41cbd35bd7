//! Strictly Minimax - command line
//!
//! Evaluates tic-tac-toe positions given on the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use strictly_minimax::{
    Board, Game, GameStatus, SearchConfig, Searcher, check_board, current_player, winning_lines,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(tie_break) = cli.tie_break {
        config = config.with_tie_break(tie_break);
    }
    let mut searcher = Searcher::new(config);

    match cli.command {
        Command::Best { board } => run_best(&mut searcher, board),
        Command::Play { board } => run_play(&mut searcher, board.unwrap_or_default()),
    }
}

/// Rejects boards that legal play cannot produce.
fn validate(board: &Board) -> Result<()> {
    if let Err(violations) = check_board(board) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Unreachable board: {}", descriptions);
    }
    Ok(())
}

/// Print the best move for one position
#[instrument(skip_all)]
fn run_best(searcher: &mut Searcher, board: Board) -> Result<()> {
    validate(&board)?;
    println!("{board}\n");

    match searcher.search(&board) {
        Some(report) => {
            info!(nodes = *report.nodes(), "Search complete");
            println!("To move: {}", current_player(&board));
            println!("Best move: {}", report.best_move());
            println!("Value: {}", report.value());
        }
        None => println!("Game over: {}", strictly_minimax::status(&board)),
    }
    Ok(())
}

/// Play the game out with the search on both sides
#[instrument(skip_all)]
fn run_play(searcher: &mut Searcher, board: Board) -> Result<()> {
    validate(&board)?;
    let mut game = Game::from_board(board);
    println!("{}\n", game.board());

    while let Some(mv) = game.play_optimal(searcher) {
        let player = current_player(game.board()).opponent();
        println!("{player} plays {mv}");
        println!("{}\n", game.board());
    }

    let status = game.status();
    println!("{status}");
    if let GameStatus::Won(player) = status {
        for [a, b, c] in winning_lines(game.board(), player) {
            println!("Winning line: {a} {b} {c}");
        }
    }
    Ok(())
}
