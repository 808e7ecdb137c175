use anyhow::{Context, Result};
use clap::Parser;
use flip_othello::{Board, Game};
use flip_player::cli::Cli;
use flip_player::connectors::ConsoleConnector;
use flip_player::{AbortSignal, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never land in the middle of the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.load_config().context("loading config")?;

    let abort = AbortSignal::new();
    let connector = ConsoleConnector::spawn(config.glyphs.clone(), abort.clone());
    let game = Game::from_board(
        Board::with_first_player(config.first_player),
        config.capture_rule,
    );

    let summary = Session::new(game, connector).with_abort(abort).run()?;
    info!(moves = summary.moves_played, "goodbye");

    Ok(())
}
