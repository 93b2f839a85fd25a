//! Finished-round records and the append-only log writer.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::game::Player;

/// Default history file, resolved against the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "match_history.txt";

/// Timestamp layout of a record line; its date prefix is what the date
/// search matches against.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Match mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Human X against the bot playing O.
    Bot,
    /// Two humans sharing the keyboard.
    Pvp,
}

/// How a round ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum Outcome {
    /// X completed a line.
    #[strum(serialize = "X")]
    X,
    /// O completed a line.
    #[strum(serialize = "O")]
    O,
    /// The board filled with no complete line.
    #[strum(serialize = "draw")]
    Draw,
}

impl Outcome {
    /// Outcome for the mark that completed a line.
    pub fn winner(mark: Player) -> Self {
        match mark {
            Player::X => Outcome::X,
            Player::O => Outcome::O,
        }
    }
}

/// One finished round as persisted to the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MatchRecord {
    timestamp: String,
    mode: GameMode,
    board_size: usize,
    moves: usize,
    outcome: Outcome,
}

impl MatchRecord {
    /// Record stamped with the current local time.
    pub fn now(mode: GameMode, board_size: usize, moves: usize, outcome: Outcome) -> Self {
        Self::new(
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
            mode,
            board_size,
            moves,
            outcome,
        )
    }

    /// The log line for this record, without a trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] Mode: {} | Board: {}x{} | Moves: {} | Result: {}",
            self.timestamp, self.mode, self.board_size, self.board_size, self.moves, self.outcome
        )
    }
}

/// Append-only writer for the match-history file.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Logger writing to `path`, created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record line.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; callers at the round level report
    /// it and keep the session alive.
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub fn append(&self, record: &MatchRecord) -> std::io::Result<()> {
        debug!(line = %record.to_line(), "appending history record");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())
    }
}
