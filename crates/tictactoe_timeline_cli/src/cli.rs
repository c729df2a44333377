//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with a time-travelling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// List moves latest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line
    Play,

    /// Play the given cells in order and print the result
    Replay {
        /// Cell indices (0-8); refused moves are skipped
        cells: Vec<usize>,

        /// Show this snapshot instead of the latest
        #[arg(long)]
        jump: Option<usize>,
    },
}
