//! Plain-text rendering of a game state.

use tictactoe_timeline::{GameState, Line, Position, Square, move_list};

/// Renders a square; marks on the winning line are bracketed, empty squares
/// show their cell index.
fn cell(square: Square, pos: Position, line: Option<Line>) -> String {
    match square {
        Square::Empty => format!(" {} ", pos.to_index()),
        Square::Occupied(player) if line.is_some_and(|l| l.contains(pos)) => {
            format!("[{}]", player)
        }
        Square::Occupied(player) => format!(" {} ", player),
    }
}

/// Renders the board on display as a 3x3 grid.
pub fn board(state: &GameState, show_coordinates: bool) -> String {
    let board = state.current_board();
    let line = state.outcome().line();

    let mut rows = Vec::with_capacity(5);
    if show_coordinates {
        rows.push("     1   2   3".to_string());
    }
    for (r, chunk) in Position::ALL.chunks(3).enumerate() {
        let cells = chunk
            .iter()
            .map(|pos| cell(board.get(*pos), *pos, line))
            .collect::<Vec<_>>()
            .join("|");
        if show_coordinates {
            rows.push(format!(" {}  {}", r + 1, cells));
        } else {
            rows.push(cells);
        }
        if r < 2 {
            let rule = "---+---+---";
            rows.push(if show_coordinates {
                format!("    {}", rule)
            } else {
                rule.to_string()
            });
        }
    }
    rows.join("\n")
}

/// Renders the move list, one numbered entry per line; the snapshot on
/// display is marked with `>`.
pub fn moves(state: &GameState) -> String {
    move_list(state)
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { '>' } else { ' ' };
            format!("{} {:>2}. {}", marker, entry.description.index(), entry.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders status, board and move list.
pub fn full(state: &GameState, show_coordinates: bool) -> String {
    format!(
        "{}\n\n{}\n\nMoves ({}):\n{}",
        state.status(),
        board(state, show_coordinates),
        state.move_order(),
        moves(state)
    )
}
