//! Driving loop for a console match: turns, terminal states, replay, log.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::game::{GameState, Player as Mark};
use crate::history::{GameMode, HistoryLog, MatchRecord, Outcome};
use crate::players::{BotPlayer, HumanPlayer, Player};
use crate::render;

/// One console match: a game state, its two move sources, and the log.
pub struct Session {
    game: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    mode: GameMode,
    log: HistoryLog,
}

impl Session {
    /// Builds a session for the given mode; bot mode seats the bot as O,
    /// so the human moves first.
    ///
    /// # Errors
    ///
    /// Fails when `size` is outside the playable range.
    pub fn new(size: usize, mode: GameMode, log: HistoryLog) -> Result<Self> {
        let game = GameState::new(size)?;
        let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = match mode {
            GameMode::Bot => (
                Box::new(HumanPlayer::new("you")),
                Box::new(BotPlayer::new("bot", Mark::O)),
            ),
            GameMode::Pvp => (
                Box::new(HumanPlayer::new("player X")),
                Box::new(HumanPlayer::new("player O")),
            ),
        };
        Ok(Self {
            game,
            player_x,
            player_o,
            mode,
            log,
        })
    }

    /// Runs rounds until a player abandons one with empty input or declines
    /// the replay prompt.
    #[instrument(skip(self), fields(mode = %self.mode, size = self.game.size()))]
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        loop {
            if self.game.move_count() == 0 {
                self.announce_round();
            }

            let mover = self.game.current_player();
            let bot_turn = self.mode == GameMode::Bot && mover == Mark::O;
            if !bot_turn {
                render::draw_board(&self.game);
                println!(
                    "{} to move ({})",
                    self.mover_name(),
                    render::styled_mark(mover)
                );
            }

            let source = match mover {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let Some(token) = source.next_move(&self.game)? else {
                println!("round abandoned");
                info!("round abandoned early");
                return Ok(());
            };

            let applied = GameState::parse_position(&token)
                .and_then(|position| self.game.apply_move(position).map(|()| position));
            let position = match applied {
                Ok(position) => position,
                Err(err) => {
                    // Recoverable: report and let the same player retry.
                    println!("{err}");
                    continue;
                }
            };
            if bot_turn {
                println!("the bot took cell {position}, your turn");
            }

            if self.game.check_winner() {
                render::draw_board(&self.game);
                println!(
                    "{} ({}) wins!",
                    self.mover_name(),
                    render::styled_mark(mover)
                );
                self.record_outcome(Outcome::winner(mover));
                if !self.ask_replay()? {
                    return Ok(());
                }
                continue;
            }
            if self.game.check_draw() {
                render::draw_board(&self.game);
                println!("the round is a draw");
                self.record_outcome(Outcome::Draw);
                if !self.ask_replay()? {
                    return Ok(());
                }
                continue;
            }
            self.game.switch_turn();
        }
    }

    fn announce_round(&self) {
        match self.mode {
            GameMode::Bot => println!("new round against the bot, you move first"),
            GameMode::Pvp => println!("new round, player against player"),
        }
        println!("press ENTER on an empty line to leave the round early");
    }

    fn mover_name(&self) -> &str {
        match self.game.current_player() {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Offers a rematch; acceptance resets the round on the same board.
    fn ask_replay(&mut self) -> Result<bool> {
        if ask_yes_no("play another round? [y/N] ")? {
            self.game.reset();
            Ok(true)
        } else {
            println!("thanks for playing");
            Ok(false)
        }
    }

    /// Writes the finished round to the history file. Failures are reported
    /// and swallowed; a broken log never ends the session.
    fn record_outcome(&self, outcome: Outcome) {
        let record = MatchRecord::now(
            self.mode,
            self.game.size(),
            self.game.move_count(),
            outcome,
        );
        if let Err(err) = self.log.append(&record) {
            warn!(%err, "history entry not written");
            eprintln!("could not write the match history: {err}");
        }
    }
}

/// Asks whether to face the bot, for runs where no mode flag was given.
///
/// # Errors
///
/// Fails only on stdin/stdout I/O errors.
pub fn prompt_mode() -> Result<GameMode> {
    if ask_yes_no("play against the bot? [y/N] ")? {
        Ok(GameMode::Bot)
    } else {
        Ok(GameMode::Pvp)
    }
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("flushing a prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading an answer from stdin")?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
