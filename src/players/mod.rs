//! Move sources: the human at the keyboard and the heuristic bot.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::HumanPlayer;

use anyhow::Result;

use crate::game::GameState;

/// A source of moves for one side of the board.
///
/// Both implementations hand back a raw position token; the session funnels
/// every move, human or bot, through the same validation path.
pub trait Player {
    /// Produces the next move as a raw 1-based position token, or `None`
    /// when the actor abandons the round.
    fn next_move(&mut self, game: &GameState) -> Result<Option<String>>;

    /// Display name used in prompts and announcements.
    fn name(&self) -> &str;
}
