//! Console entry point: tracing setup and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use noughts::cli::{Cli, Command, HistoryQuery};
use noughts::history::{HistoryBrowser, HistoryLog, ModeWinRate, StatsSummary};
use noughts::session::{self, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            size,
            mode,
            history_file,
        } => run_play(size, mode, history_file),
        Command::History {
            history_file,
            query,
        } => run_history(history_file, query),
    }
}

fn run_play(
    size: usize,
    mode: Option<noughts::GameMode>,
    history_file: PathBuf,
) -> Result<()> {
    let mode = match mode {
        Some(mode) => mode,
        None => session::prompt_mode()?,
    };
    info!(%mode, size, "starting a match");
    let mut session = Session::new(size, mode, HistoryLog::new(history_file))?;
    session.run()
}

fn run_history(history_file: PathBuf, query: HistoryQuery) -> Result<()> {
    let browser = HistoryBrowser::open(history_file)?;
    match query {
        HistoryQuery::Show => {
            println!("--- match history ---");
            for line in browser.raw_lines() {
                println!("{line}");
            }
        }
        HistoryQuery::Draws => {
            println!("--- drawn matches ---");
            for record in browser.draws() {
                println!("{}", record.to_line());
            }
        }
        HistoryQuery::Stats => print_stats(&browser.stats()),
        HistoryQuery::Wins { player } => {
            println!("--- matches won by {player:?} ---");
            for record in browser.wins_of(player.into()) {
                println!("{}", record.to_line());
            }
        }
        HistoryQuery::Last { count } => {
            let recent = browser.last(count as usize);
            println!("--- last {} of {} matches ---", recent.len(), browser.records().len());
            for record in recent {
                println!("{}", record.to_line());
            }
        }
        HistoryQuery::Winrate { mode } => match browser.winrate(mode) {
            Some(rate) => print_winrate(&rate),
            None => println!("no matches recorded for mode {mode} yet"),
        },
        HistoryQuery::Fastest => match browser.fastest() {
            Some(record) => println!(
                "fastest match: {} moves on {}",
                record.moves(),
                record.timestamp()
            ),
            None => println!("no matches recorded yet"),
        },
        HistoryQuery::Date { date } => {
            let found = browser.by_date(&date);
            if found.is_empty() {
                println!("no matches found for {date}");
            } else {
                println!("--- matches on {date} ---");
                for record in found {
                    println!("{}", record.to_line());
                }
            }
        }
        HistoryQuery::Moves => println!("total moves recorded: {}", browser.total_moves()),
        HistoryQuery::Boards => {
            println!("combined board area: {} cells", browser.total_board_area());
        }
        HistoryQuery::Clear { confirm } => {
            let confirmed = match confirm.as_deref() {
                Some(token) => browser.remove(token)?,
                None => false,
            };
            if confirmed {
                println!("history file deleted");
            } else {
                println!("pass --confirm delete to really remove the history");
            }
        }
    }
    Ok(())
}

fn print_stats(stats: &StatsSummary) {
    println!("--- wins and draws ---");
    println!(
        "X wins   | pvp {} | bot {} | total {}",
        stats.x_wins_pvp(),
        stats.x_wins_bot(),
        stats.total_x_wins()
    );
    println!(
        "O wins   | pvp {} | bot {} | total {}",
        stats.o_wins_pvp(),
        stats.o_wins_bot(),
        stats.total_o_wins()
    );
    println!(
        "draws    | pvp {} | bot {} | total {}",
        stats.draws_pvp(),
        stats.draws_bot(),
        stats.total_draws()
    );
    println!("matches recorded: {}", stats.total_matches());
}

fn print_winrate(rate: &ModeWinRate) {
    println!(
        "mode {} over {} matches | X {:.1}% | O {:.1}% | draws {:.1}%",
        rate.mode(),
        rate.total(),
        rate.x_percent(),
        rate.o_percent(),
        rate.draw_percent()
    );
}
