//! tictactoe_timeline - terminal driver

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use tictactoe_timeline::{GameState, MoveOrder};
use tictactoe_timeline_cli::{Cli, CliCommand, Session, ViewConfig, render_full};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ViewConfig::load(cli.config.as_deref())?;
    if cli.descending {
        config = config.with_move_order(MoveOrder::Descending);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        CliCommand::Play => run_play(&config),
        CliCommand::Replay { cells, jump } => run_replay(&config, &cells, jump),
    }
}

/// Run the interactive prompt on stdin/stdout
fn run_play(config: &ViewConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut session = Session::new(config);
    session.run(std::io::stdin().lock(), std::io::stdout().lock())
}

/// Play `cells` from a new game and print the outcome
#[instrument(skip(config))]
fn run_replay(config: &ViewConfig, cells: &[usize], jump: Option<usize>) -> Result<()> {
    let mut state = GameState::replay(cells).with_move_order(*config.move_order());
    if let Some(target) = jump {
        if !state.can_jump_to(target) {
            bail!(
                "No move #{} (history has moves 0-{})",
                target,
                state.history().latest_index()
            );
        }
        state = state.jump_to(target);
    }
    println!("{}", render_full(&state, *config.show_coordinates()));
    Ok(())
}
