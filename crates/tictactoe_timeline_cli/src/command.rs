//! Commands read from the interactive prompt.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_timeline::Position;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark on a raw cell index; labels such as `center`
    /// are resolved to their index.
    Play(usize),
    /// Display an earlier snapshot.
    Jump(usize),
    /// Flip the move-list order.
    Order,
    /// Print the board, status and move list.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the prompt.
    Quit,
}

/// Input that names no command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Empty line.
    #[display("Empty command (type 'help')")]
    Empty,
    /// Unknown verb.
    #[display("Unknown command '{}' (type 'help')", verb)]
    Unknown {
        /// The word that was typed.
        verb: String,
    },
    /// Verb argument could not be read.
    #[display("'{}' expects {}, got '{}'", verb, expected, arg)]
    BadArgument {
        /// The verb that was typed.
        verb: &'static str,
        /// What the verb accepts.
        expected: &'static str,
        /// What followed it.
        arg: String,
    },
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  play <cell>  place the next mark; cell is 0-8 or a label such as
               center or bottom-left (a bare number works too)
  jump <n>     show snapshot n from the move list
  order        flip the move list between ascending and descending
  show         print the board again
  help         print this summary
  quit         leave";

fn number(verb: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.unwrap_or_default();
    arg.parse().map_err(|_| CommandError::BadArgument {
        verb,
        expected: "a number",
        arg: arg.to_string(),
    })
}

/// A raw index, kept as typed so the game reports out-of-range cells, or a
/// square label.
fn cell(arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.unwrap_or_default();
    if let Ok(index) = arg.parse() {
        return Ok(index);
    }
    Position::from_label_or_number(arg)
        .map(Position::to_index)
        .ok_or_else(|| CommandError::BadArgument {
            verb: "play",
            expected: "a cell (0-8 or a label)",
            arg: arg.to_string(),
        })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let arg = words.next();

        if let Ok(cell) = verb.parse::<usize>() {
            return Ok(Command::Play(cell));
        }
        match verb.to_lowercase().as_str() {
            "play" | "p" => cell(arg).map(Command::Play),
            "jump" | "j" => number("jump", arg).map(Command::Jump),
            "order" | "o" => Ok(Command::Order),
            "show" | "s" => Ok(Command::Show),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown {
                verb: verb.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbs() {
        assert_eq!("play 4".parse::<Command>(), Ok(Command::Play(4)));
        assert_eq!("7".parse::<Command>(), Ok(Command::Play(7)));
        assert_eq!("J 2".parse::<Command>(), Ok(Command::Jump(2)));
        assert_eq!("  order ".parse::<Command>(), Ok(Command::Order));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::BadArgument {
                verb: "jump",
                expected: "a number",
                arg: String::new()
            })
        );
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown { .. })
        ));
    }

    #[test]
    fn test_play_accepts_square_labels() {
        assert_eq!("play center".parse::<Command>(), Ok(Command::Play(4)));
        assert_eq!("p Bottom-Left".parse::<Command>(), Ok(Command::Play(6)));
        assert_eq!("play top-right".parse::<Command>(), Ok(Command::Play(2)));

        let err = "play nowhere".parse::<Command>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "'play' expects a cell (0-8 or a label), got 'nowhere'"
        );
    }

    #[test]
    fn test_out_of_range_cell_still_parses() {
        // Range checks belong to the game, not the parser.
        assert_eq!("play 12".parse::<Command>(), Ok(Command::Play(12)));
    }
}
