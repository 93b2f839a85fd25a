//! Bot player wrapping the tiered selector.

use anyhow::Result;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use super::Player;
use crate::bot::select_move;
use crate::game::{GameState, Player as Mark};

/// Bot driven by [`select_move`], with an injectable random source for the
/// fallback tier.
pub struct BotPlayer<R: Rng> {
    name: String,
    mark: Mark,
    rng: R,
}

impl BotPlayer<ThreadRng> {
    /// Bot using the thread-local generator.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self::with_rng(name, mark, rand::rng())
    }
}

impl<R: Rng> BotPlayer<R> {
    /// Bot with an explicit generator, for reproducible play.
    pub fn with_rng(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl<R: Rng> Player for BotPlayer<R> {
    fn next_move(&mut self, game: &GameState) -> Result<Option<String>> {
        let (row, col) = select_move(game, self.mark, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("no empty cell left for the bot"))?;
        let position = row * game.size() + col + 1;
        debug!(bot = %self.name, position, "bot chose a cell");
        Ok(Some(position.to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
