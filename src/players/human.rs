//! Human player reading 1-based cell numbers from standard input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use super::Player;
use crate::game::GameState;

/// Human player prompting on stdout and reading tokens from stdin.
///
/// An empty line (or closed stdin) signals that the round is abandoned.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn next_move(&mut self, game: &GameState) -> Result<Option<String>> {
        print!("enter a cell 1 - {}: ", game.limit());
        io::stdout().flush().context("flushing the move prompt")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading a move from stdin")?;
        let token = line.trim_end_matches(['\r', '\n']).to_string();
        if read == 0 || token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
