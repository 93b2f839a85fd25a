//! Post-hoc queries over the match-history file.
//!
//! The browser reads the whole file at construction and parses each line
//! with a regular expression. Lines that do not match stay visible to the
//! raw dump but are skipped by the structured queries.

use std::fs;
use std::path::PathBuf;

use derive_getters::Getters;
use regex::Regex;
use tracing::{debug, instrument, warn};

use super::record::{GameMode, MatchRecord, Outcome};
use crate::game::Player;

/// Shape of one record line, with named groups for every field.
const LINE_PATTERN: &str = r"^\[(?P<date>[^\]]+)\] Mode: (?P<mode>bot|pvp) \| Board: (?P<size>\d+)x\d+ \| Moves: (?P<moves>\d+) \| Result: (?P<result>X|O|draw)$";

/// Confirmation token required to delete the history file.
const DELETE_TOKEN: &str = "delete";

/// Failure to open the history file.
#[derive(Debug, derive_more::Display)]
pub enum HistoryError {
    /// No history file exists yet.
    #[display("history file {} not found, finish at least one match first", _0.display())]
    Missing(PathBuf),

    /// The file exists but could not be read.
    #[display("could not read history file {}: {_1}", _0.display())]
    Unreadable(PathBuf, std::io::Error),
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Missing(_) => None,
            HistoryError::Unreadable(_, err) => Some(err),
        }
    }
}

/// Win and draw counts split by mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct StatsSummary {
    x_wins_pvp: usize,
    x_wins_bot: usize,
    o_wins_pvp: usize,
    o_wins_bot: usize,
    draws_pvp: usize,
    draws_bot: usize,
}

impl StatsSummary {
    /// X wins across both modes.
    pub fn total_x_wins(&self) -> usize {
        self.x_wins_pvp + self.x_wins_bot
    }

    /// O wins across both modes.
    pub fn total_o_wins(&self) -> usize {
        self.o_wins_pvp + self.o_wins_bot
    }

    /// Draws across both modes.
    pub fn total_draws(&self) -> usize {
        self.draws_pvp + self.draws_bot
    }

    /// Every recorded match.
    pub fn total_matches(&self) -> usize {
        self.total_x_wins() + self.total_o_wins() + self.total_draws()
    }
}

/// Outcome percentages for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct ModeWinRate {
    mode: GameMode,
    total: usize,
    x_percent: f64,
    o_percent: f64,
    draw_percent: f64,
}

/// Reader over the persisted match history.
#[derive(Debug)]
pub struct HistoryBrowser {
    path: PathBuf,
    lines: Vec<String>,
    records: Vec<MatchRecord>,
}

impl HistoryBrowser {
    /// Opens the history file and parses every record line.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Missing`] when the file does not exist, or
    /// [`HistoryError::Unreadable`] on any other read failure.
    #[instrument(skip(path))]
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        if !path.is_file() {
            return Err(HistoryError::Missing(path));
        }
        let contents =
            fs::read_to_string(&path).map_err(|err| HistoryError::Unreadable(path.clone(), err))?;

        let lines: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let pattern = Regex::new(LINE_PATTERN).expect("record line pattern compiles");
        let mut records = Vec::with_capacity(lines.len());
        for line in &lines {
            match parse_line(&pattern, line) {
                Some(record) => records.push(record),
                None => warn!(%line, "skipping unparseable history line"),
            }
        }
        debug!(
            path = %path.display(),
            lines = lines.len(),
            records = records.len(),
            "history loaded"
        );
        Ok(Self {
            path,
            lines,
            records,
        })
    }

    /// Every non-empty line of the file, parseable or not.
    pub fn raw_lines(&self) -> &[String] {
        &self.lines
    }

    /// Every parsed record, oldest first.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Matches that ended in a draw.
    pub fn draws(&self) -> Vec<&MatchRecord> {
        self.records
            .iter()
            .filter(|record| *record.outcome() == Outcome::Draw)
            .collect()
    }

    /// Matches won by the given player.
    pub fn wins_of(&self, player: Player) -> Vec<&MatchRecord> {
        let wanted = Outcome::winner(player);
        self.records
            .iter()
            .filter(|record| *record.outcome() == wanted)
            .collect()
    }

    /// Win and draw counts per mode.
    pub fn stats(&self) -> StatsSummary {
        let mut summary = StatsSummary::default();
        for record in &self.records {
            match (record.mode(), record.outcome()) {
                (GameMode::Pvp, Outcome::X) => summary.x_wins_pvp += 1,
                (GameMode::Bot, Outcome::X) => summary.x_wins_bot += 1,
                (GameMode::Pvp, Outcome::O) => summary.o_wins_pvp += 1,
                (GameMode::Bot, Outcome::O) => summary.o_wins_bot += 1,
                (GameMode::Pvp, Outcome::Draw) => summary.draws_pvp += 1,
                (GameMode::Bot, Outcome::Draw) => summary.draws_bot += 1,
            }
        }
        summary
    }

    /// The most recent `count` records, newest first, clamped to the
    /// history length.
    pub fn last(&self, count: usize) -> Vec<&MatchRecord> {
        self.records.iter().rev().take(count).collect()
    }

    /// Outcome percentages for `mode`, or `None` when that mode has no
    /// recorded matches yet.
    pub fn winrate(&self, mode: GameMode) -> Option<ModeWinRate> {
        let of_mode: Vec<&MatchRecord> = self
            .records
            .iter()
            .filter(|record| *record.mode() == mode)
            .collect();
        let total = of_mode.len();
        if total == 0 {
            return None;
        }
        let count = |outcome: Outcome| {
            of_mode
                .iter()
                .filter(|record| *record.outcome() == outcome)
                .count()
        };
        let percent = |n: usize| 100.0 / total as f64 * n as f64;
        Some(ModeWinRate {
            mode,
            total,
            x_percent: percent(count(Outcome::X)),
            o_percent: percent(count(Outcome::O)),
            draw_percent: percent(count(Outcome::Draw)),
        })
    }

    /// The record with the fewest moves, or `None` on an empty history.
    pub fn fastest(&self) -> Option<&MatchRecord> {
        self.records.iter().min_by_key(|record| *record.moves())
    }

    /// Records whose timestamp starts with `prefix` (`DD.MM.YYYY` for a
    /// whole day).
    pub fn by_date(&self, prefix: &str) -> Vec<&MatchRecord> {
        self.records
            .iter()
            .filter(|record| record.timestamp().starts_with(prefix))
            .collect()
    }

    /// Moves played across every recorded match.
    pub fn total_moves(&self) -> usize {
        self.records.iter().map(|record| record.moves()).sum()
    }

    /// Combined cell count of every recorded board.
    pub fn total_board_area(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.board_size() * record.board_size())
            .sum()
    }

    /// Deletes the history file when `confirm` is the literal token
    /// `"delete"`; returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn remove(self, confirm: &str) -> std::io::Result<bool> {
        if confirm != DELETE_TOKEN {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }
}

fn parse_line(pattern: &Regex, line: &str) -> Option<MatchRecord> {
    let captures = pattern.captures(line)?;
    let mode: GameMode = captures["mode"].parse().ok()?;
    let outcome: Outcome = captures["result"].parse().ok()?;
    let board_size: usize = captures["size"].parse().ok()?;
    let moves: usize = captures["moves"].parse().ok()?;
    Some(MatchRecord::new(
        captures["date"].to_string(),
        mode,
        board_size,
        moves,
        outcome,
    ))
}
