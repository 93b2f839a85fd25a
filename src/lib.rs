//! Console noughts and crosses on an n×n board.
//!
//! The crate splits into a pure game-state engine ([`game`]), the tiered
//! heuristic bot ([`bot`]), console glue ([`players`], [`render`],
//! [`session`]), the match-history writer and analytics ([`history`]), and
//! the command-line surface ([`cli`]).
//!
//! # Example
//!
//! ```
//! use noughts::game::GameState;
//!
//! let mut game = GameState::new(3)?;
//! game.apply_move(5)?;
//! assert_eq!(game.move_count(), 1);
//! assert!(!game.check_winner());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bot;
pub mod cli;
pub mod game;
pub mod history;
pub mod players;
pub mod render;
pub mod session;

// Crate-level exports - game engine
pub use game::{Board, Cell, ConfigError, GameState, LineCatalog, MoveError, Player};

// Crate-level exports - match history
pub use history::{GameMode, HistoryBrowser, HistoryLog, MatchRecord, Outcome};
