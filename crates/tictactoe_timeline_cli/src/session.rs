//! Interactive session driving one game.

use crate::command::{Command, HELP};
use crate::config::ViewConfig;
use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_timeline::GameState;
use tracing::{debug, info, instrument};

/// What the prompt should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line.
    Continue(String),
    /// Print the text and stop.
    Quit(String),
}

/// One game plus the display settings it is shown with.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    show_coordinates: bool,
}

impl Session {
    /// Starts a new game with the configured move order.
    #[instrument(skip(config))]
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            state: GameState::new().with_move_order(*config.move_order()),
            show_coordinates: *config.show_coordinates(),
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Renders status, board and move list.
    pub fn view(&self) -> String {
        render::full(&self.state, self.show_coordinates)
    }

    /// Applies one command.
    ///
    /// Refused moves leave the game as it was; the reason is echoed so the
    /// player knows the click did nothing.
    #[instrument(skip(self), fields(current_move = self.state.current_move()))]
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Play(cell) => match self.state.try_apply_move_at(cell) {
                Ok(next) => {
                    self.state = next;
                    Reply::Continue(self.view())
                }
                Err(e) => {
                    debug!(error = %e, "Move refused");
                    Reply::Continue(format!("{}\n{}", e, self.state.status()))
                }
            },
            Command::Jump(target) if self.state.can_jump_to(target) => {
                self.state = std::mem::take(&mut self.state).jump_to(target);
                Reply::Continue(self.view())
            }
            Command::Jump(target) => Reply::Continue(format!(
                "No move #{} (history has moves 0-{})",
                target,
                self.state.history().latest_index()
            )),
            Command::Order => {
                self.state = std::mem::take(&mut self.state).toggle_move_order();
                Reply::Continue(render::moves(&self.state))
            }
            Command::Show => Reply::Continue(self.view()),
            Command::Help => Reply::Continue(HELP.to_string()),
            Command::Quit => Reply::Quit(self.state.status().to_string()),
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Session started");
        writeln!(output, "{}\n", self.view()).context("Failed to write board")?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let reply = match line.parse::<Command>() {
                Ok(command) => self.handle(command),
                Err(e) => Reply::Continue(e.to_string()),
            };
            match reply {
                Reply::Continue(text) => {
                    writeln!(output, "{}\n", text).context("Failed to write reply")?
                }
                Reply::Quit(text) => {
                    writeln!(output, "{}", text).context("Failed to write reply")?;
                    break;
                }
            }
        }

        info!(moves = self.state.history().latest_index(), "Session ended");
        Ok(())
    }
}
