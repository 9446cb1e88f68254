//! Command-line interface for qipan.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Qipan - K-in-a-row board game for two players on one terminal
#[derive(Parser, Debug)]
#[command(name = "qipan")]
#[command(about = "K-in-a-row board game for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on this terminal
    Play {
        /// Board and rule options
        #[command(flatten)]
        board: BoardArgs,

        /// Print raw JSON boundary output instead of a drawn board
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Board and rule options
        #[command(flatten)]
        board: BoardArgs,
    },
}

/// Board options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Path to a TOML config file
    #[arg(short, long, env = "QIPAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of rows (overrides the config file)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns (overrides the config file)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Marks in a row needed to win (overrides the config file)
    #[arg(short = 'k', long)]
    pub win_length: Option<usize>,
}
