//! Tests for the match-history writer and the analytics browser.

use noughts::game::Player;
use noughts::history::{GameMode, HistoryBrowser, HistoryError, HistoryLog, MatchRecord, Outcome};

fn record(timestamp: &str, mode: GameMode, size: usize, moves: usize, outcome: Outcome) -> MatchRecord {
    MatchRecord::new(timestamp.to_string(), mode, size, moves, outcome)
}

/// A small history: three bot matches and two pvp matches over two days.
fn sample_log(dir: &std::path::Path) -> HistoryLog {
    let log = HistoryLog::new(dir.join("history.txt"));
    let records = [
        record("01.08.2026 10:00", GameMode::Bot, 3, 7, Outcome::X),
        record("01.08.2026 10:15", GameMode::Bot, 3, 9, Outcome::Draw),
        record("01.08.2026 21:40", GameMode::Pvp, 4, 12, Outcome::O),
        record("02.08.2026 09:05", GameMode::Bot, 3, 5, Outcome::O),
        record("02.08.2026 09:30", GameMode::Pvp, 3, 8, Outcome::X),
    ];
    for record in &records {
        log.append(record).unwrap();
    }
    log
}

#[test]
fn test_append_then_parse_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let log = HistoryLog::new(dir.path().join("history.txt"));
    let written = record("07.08.2026 14:05", GameMode::Bot, 3, 7, Outcome::X);
    log.append(&written).unwrap();

    let browser = HistoryBrowser::open(log.path()).unwrap();
    assert_eq!(browser.records(), &[written]);
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = HistoryBrowser::open(dir.path().join("nothing.txt"));
    assert!(matches!(result, Err(HistoryError::Missing(_))));
}

#[test]
fn test_unparseable_lines_are_skipped_but_dumped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.txt");
    let log = HistoryLog::new(&path);
    log.append(&record("01.08.2026 10:00", GameMode::Pvp, 3, 9, Outcome::Draw))
        .unwrap();
    std::fs::write(
        &path,
        format!(
            "{}scribbled over\n",
            std::fs::read_to_string(&path).unwrap()
        ),
    )
    .unwrap();

    let browser = HistoryBrowser::open(&path).unwrap();
    assert_eq!(browser.raw_lines().len(), 2);
    assert_eq!(browser.records().len(), 1);
}

#[test]
fn test_draw_and_win_filters() {
    let dir = tempfile::tempdir().unwrap();
    let log = sample_log(dir.path());
    let browser = HistoryBrowser::open(log.path()).unwrap();

    let draws = browser.draws();
    assert_eq!(draws.len(), 1);
    assert_eq!(*draws[0].moves(), 9);

    let x_wins = browser.wins_of(Player::X);
    assert_eq!(x_wins.len(), 2);
    assert!(x_wins.iter().all(|r| *r.outcome() == Outcome::X));
    assert_eq!(browser.wins_of(Player::O).len(), 2);
}

#[test]
fn test_stats_counts_per_mode() {
    let dir = tempfile::tempdir().unwrap();
    let log = sample_log(dir.path());
    let browser = HistoryBrowser::open(log.path()).unwrap();

    let stats = browser.stats();
    assert_eq!(*stats.x_wins_bot(), 1);
    assert_eq!(*stats.x_wins_pvp(), 1);
    assert_eq!(*stats.o_wins_bot(), 1);
    assert_eq!(*stats.o_wins_pvp(), 1);
    assert_eq!(*stats.draws_bot(), 1);
    assert_eq!(*stats.draws_pvp(), 0);
    assert_eq!(stats.total_matches(), 5);
}

#[test]
fn test_last_returns_newest_first_and_clamps() {
    let dir = tempfile::tempdir().unwrap();
    let log = sample_log(dir.path());
    let browser = HistoryBrowser::open(log.path()).unwrap();

    let last_two = browser.last(2);
    assert_eq!(last_two[0].timestamp(), "02.08.2026 09:30");
    assert_eq!(last_two[1].timestamp(), "02.08.2026 09:05");
    assert_eq!(browser.last(40).len(), 5);
}

#[test]
fn test_winrate_percentages() {
    let dir = tempfile::tempdir().unwrap();
    let log = sample_log(dir.path());
    let browser = HistoryBrowser::open(log.path()).unwrap();

    let rate = browser.winrate(GameMode::Bot).unwrap();
    assert_eq!(*rate.total(), 3);
    let third = 100.0 / 3.0;
    assert!((rate.x_percent() - third).abs() < 1e-9);
    assert!((rate.o_percent() - third).abs() < 1e-9);
    assert!((rate.draw_percent() - third).abs() < 1e-9);
    let sum = rate.x_percent() + rate.o_percent() + rate.draw_percent();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_winrate_of_unplayed_mode_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let log = HistoryLog::new(dir.path().join("history.txt"));
    log.append(&record("01.08.2026 10:00", GameMode::Bot, 3, 7, Outcome::X))
        .unwrap();
    let browser = HistoryBrowser::open(log.path()).unwrap();
    assert!(browser.winrate(GameMode::Pvp).is_none());
}

#[test]
fn test_fastest_game_and_totals() {
    let dir = tempfile::tempdir().unwrap();
    let log = sample_log(dir.path());
    let browser = HistoryBrowser::open(log.path()).unwrap();

    let fastest = browser.fastest().unwrap();
    assert_eq!(*fastest.moves(), 5);
    assert_eq!(fastest.timestamp(), "02.08.2026 09:05");

    assert_eq!(browser.total_moves(), 7 + 9 + 12 + 5 + 8);
    assert_eq!(browser.total_board_area(), 9 + 9 + 16 + 9 + 9);
}

#[test]
fn test_date_prefix_search() {
    let dir = tempfile::tempdir().unwrap();
    let log = sample_log(dir.path());
    let browser = HistoryBrowser::open(log.path()).unwrap();

    assert_eq!(browser.by_date("01.08.2026").len(), 3);
    assert_eq!(browser.by_date("02.08.2026").len(), 2);
    assert!(browser.by_date("03.08.2026").is_empty());
}

#[test]
fn test_remove_requires_the_confirmation_token() {
    let dir = tempfile::tempdir().unwrap();
    let log = sample_log(dir.path());

    let browser = HistoryBrowser::open(log.path()).unwrap();
    assert!(!browser.remove("yes").unwrap());
    assert!(log.path().is_file());

    let browser = HistoryBrowser::open(log.path()).unwrap();
    assert!(browser.remove("delete").unwrap());
    assert!(!log.path().is_file());
}
