//! Match-history persistence and post-hoc analytics over the text log.

mod analytics;
mod record;

pub use analytics::{HistoryBrowser, HistoryError, ModeWinRate, StatsSummary};
pub use record::{DEFAULT_HISTORY_FILE, GameMode, HistoryLog, MatchRecord, Outcome};
