//! Qipan - terminal front end
//!
//! Two players share one terminal and take turns typing coordinates.

#![warn(missing_docs)]

mod cli;
mod play;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use play::Session;
use qipan::QipanGame;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { board, json } => run_play(&board, json),
        Command::Config { board } => run_config(&board),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(board))]
fn run_play(board: &cli::BoardArgs, json: bool) -> Result<()> {
    let config = settings::resolve(board).context("Invalid game configuration")?;
    info!(?config, "Starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        QipanGame::with_config(config),
        stdin.lock(),
        stdout.lock(),
        json,
    );
    session.run()?;

    let (game, _) = session.into_parts();
    info!(
        move_count = game.engine().move_count(),
        status = %game.engine().status(),
        "Game closed"
    );
    Ok(())
}

/// Print the effective configuration
fn run_config(board: &cli::BoardArgs) -> Result<()> {
    let rendered = settings::render(board).context("Invalid game configuration")?;
    print!("{rendered}");
    Ok(())
}
