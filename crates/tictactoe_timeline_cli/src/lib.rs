//! Terminal driver for [`tictactoe_timeline`].
//!
//! Parses the command line, loads the display config, and feeds commands
//! into a [`Session`]. All game rules live in the core crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod render;
mod session;

pub use cli::{Cli, Command as CliCommand};
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, ViewConfig};
pub use render::{board as render_board, full as render_full, moves as render_moves};
pub use session::{Reply, Session};
