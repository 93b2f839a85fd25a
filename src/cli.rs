//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::game::Player;
use crate::history::{DEFAULT_HISTORY_FILE, GameMode};

/// Noughts and crosses for the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Console tic-tac-toe with a heuristic bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match
    Play {
        /// Board side length (2-9)
        #[arg(short, long, default_value_t = 3)]
        size: usize,

        /// Opponent mode; prompts interactively when omitted
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Match-history file
        #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
        history_file: PathBuf,
    },

    /// Browse the match history
    History {
        /// Match-history file
        #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
        history_file: PathBuf,

        /// Query to run
        #[command(subcommand)]
        query: HistoryQuery,
    },
}

/// Queries over the match-history file.
#[derive(Subcommand, Debug)]
pub enum HistoryQuery {
    /// Print every recorded match
    Show,

    /// Print only drawn matches
    Draws,

    /// Win and draw counts per mode
    Stats,

    /// Matches won by the given player
    Wins {
        /// Which player's wins to list
        #[arg(value_enum)]
        player: MarkArg,
    },

    /// The most recent N matches
    Last {
        /// How many matches to show
        #[arg(value_parser = clap::value_parser!(u8).range(1..=40))]
        count: u8,
    },

    /// Win percentages for one mode
    Winrate {
        /// Mode to break down
        #[arg(value_enum)]
        mode: GameMode,
    },

    /// The match with the fewest moves
    Fastest,

    /// Matches played on a date
    Date {
        /// Date prefix to match (DD.MM.YYYY)
        date: String,
    },

    /// Total moves across all matches
    Moves,

    /// Combined board area across all matches
    Boards,

    /// Delete the history file
    Clear {
        /// Type "delete" to confirm
        #[arg(long)]
        confirm: Option<String>,
    },
}

/// Player selector for history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Player {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}
