//! Line-oriented board rendering with colored marks.

use crossterm::style::Stylize;

use crate::game::{Cell, GameState, Player};

/// Width of one cell in characters.
const CELL_WIDTH: usize = 5;

/// Prints the board grid to stdout.
///
/// While a round is live every mark keeps its color (X red, O green). Once a
/// winning line is recorded, marks outside it turn grey so the line stands
/// out. Rows are separated by underscore rules so each cell reads as a box.
pub fn draw_board(game: &GameState) {
    let size = game.size();
    let spacer = vec![" ".repeat(CELL_WIDTH); size].join("|");
    let separator = vec!["_".repeat(CELL_WIDTH); size].join("|");

    for row in 0..size {
        println!("{spacer}");
        let cells: Vec<String> = (0..size)
            .map(|col| styled_cell(game, row, col))
            .collect();
        println!("{}", cells.join("|"));
        if row < size - 1 {
            println!("{separator}");
        } else {
            println!("{spacer}");
        }
    }
}

/// The mark colored as it appears on the board, for prompts.
pub fn styled_mark(mark: Player) -> String {
    match mark {
        Player::X => mark.to_string().red().to_string(),
        Player::O => mark.to_string().green().to_string(),
    }
}

fn styled_cell(game: &GameState, row: usize, col: usize) -> String {
    let mark = match game.board().get(row, col) {
        Cell::Empty => return " ".repeat(CELL_WIDTH),
        Cell::Occupied(mark) => mark,
    };
    let padded = format!("{:^CELL_WIDTH$}", mark.symbol());
    let dimmed = game
        .winning_line()
        .is_some_and(|line| !line.contains(&(row, col)));
    if dimmed {
        padded.dark_grey().to_string()
    } else {
        match mark {
            Player::X => padded.red().to_string(),
            Player::O => padded.green().to_string(),
        }
    }
}
