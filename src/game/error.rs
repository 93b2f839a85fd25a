//! Error taxonomy for game construction and move application.
//!
//! Every variant is recoverable at the round level: the driving loop reports
//! the message and re-prompts without touching game state.

use super::types::Player;

/// Invalid game configuration, rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Requested board side is outside the playable range.
    #[display("board size {_0} is not supported, choose a side from 2 to 9")]
    SizeOutOfRange(usize),
}

impl std::error::Error for ConfigError {}

/// A rejected move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The raw token could not be read as a positive integer.
    #[display("could not read \"{_0}\" as a cell number, enter a digit")]
    InvalidInput(String),

    /// The parsed position falls outside `[1, n²]`.
    #[display("cell {position} is off the board, enter a number from 1 to {limit}")]
    OutOfRange {
        /// The position as entered.
        position: usize,
        /// Largest valid position, `n²`.
        limit: usize,
    },

    /// The target cell already holds a mark.
    #[display("cell {position} is already taken by {occupied_by}")]
    CellOccupied {
        /// The position as entered.
        position: usize,
        /// Mark currently sitting on the cell.
        occupied_by: Player,
    },
}

impl std::error::Error for MoveError {}
