//! Heuristic move selection for the bot.
//!
//! The selector is a priority ladder over the shared line catalog: complete
//! an own line, block the opponent's, take the center, then fall back to a
//! uniform random empty cell. The first three tiers are fully deterministic
//! given catalog order; only the fallback draws from the injected generator,
//! so seeded play is reproducible.

use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::debug;

use crate::game::{Cell, Coord, GameState, Player};

/// Picks the next cell for `mark` on the current board.
///
/// Returns `None` only when no empty cell remains, which a caller driving
/// non-terminal rounds never observes.
pub fn select_move<R: Rng>(game: &GameState, mark: Player, rng: &mut R) -> Option<Coord> {
    if let Some(cell) = winning_cell(game, mark) {
        debug!(?cell, %mark, "completing own line");
        return Some(cell);
    }
    if let Some(cell) = winning_cell(game, mark.opponent()) {
        debug!(?cell, %mark, "blocking the opponent");
        return Some(cell);
    }
    // For even sizes this lands on the top-left cell of the lower-right
    // quadrant, not a geometric center.
    let center = game.size() / 2;
    if !game.board().is_occupied(center, center) {
        debug!(row = center, col = center, %mark, "taking the center");
        return Some((center, center));
    }
    let empty = game.board().empty_cells();
    let cell = empty.choose(rng).copied();
    debug!(?cell, %mark, "random fallback");
    cell
}

/// First line in catalog order that `mark` fills but for one empty cell;
/// returns that cell.
fn winning_cell(game: &GameState, mark: Player) -> Option<Coord> {
    let size = game.size();
    for line in game.catalog().lines() {
        let mut own = 0;
        let mut empties = 0;
        let mut open_cell = None;
        for &(row, col) in line {
            match game.board().get(row, col) {
                Cell::Occupied(m) if m == mark => own += 1,
                Cell::Empty => {
                    empties += 1;
                    open_cell = Some((row, col));
                }
                Cell::Occupied(_) => {}
            }
        }
        if own == size - 1 && empties == 1 {
            return open_cell;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Applies 1-based positions with alternating turns, no terminal checks.
    fn play(game: &mut GameState, positions: &[usize]) {
        for &position in positions {
            game.apply_move(position).unwrap();
            game.switch_turn();
        }
    }

    #[test]
    fn test_win_beats_block_and_center() {
        let mut game = GameState::new(3).unwrap();
        // X threatens the bottom row, O threatens the top row, center free.
        play(&mut game, &[9, 1, 7, 2]);
        assert_eq!(select_move(&game, Player::O, &mut rng()), Some((0, 2)));
    }

    #[test]
    fn test_block_beats_center() {
        let mut game = GameState::new(3).unwrap();
        // X threatens the bottom row, O has no threat, center free.
        play(&mut game, &[7, 3, 8]);
        assert_eq!(select_move(&game, Player::O, &mut rng()), Some((2, 2)));
    }

    #[test]
    fn test_center_on_open_board() {
        let game = GameState::new(3).unwrap();
        assert_eq!(select_move(&game, Player::O, &mut rng()), Some((1, 1)));
    }

    #[test]
    fn test_even_size_center_cell() {
        let game = GameState::new(4).unwrap();
        assert_eq!(select_move(&game, Player::O, &mut rng()), Some((2, 2)));
    }

    #[test]
    fn test_fallback_is_seeded_and_legal() {
        let mut game = GameState::new(3).unwrap();
        // Center taken, no line holds two of a kind with one gap.
        play(&mut game, &[5, 1]);
        let first = select_move(&game, Player::X, &mut rng()).unwrap();
        let again = select_move(&game, Player::X, &mut rng()).unwrap();
        assert_eq!(first, again);
        assert!(game.board().empty_cells().contains(&first));
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut game = GameState::new(2).unwrap();
        for position in 1..=4 {
            game.apply_move(position).unwrap();
            game.switch_turn();
        }
        assert_eq!(select_move(&game, Player::O, &mut rng()), None);
    }
}
