//! Game-state engine: board, win-line catalog, round state, and errors.

mod error;
mod lines;
mod state;
mod types;

pub use error::{ConfigError, MoveError};
pub use lines::{Coord, Line, LineCatalog};
pub use state::GameState;
pub use types::{Board, Cell, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Player};
