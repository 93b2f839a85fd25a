//! Round state: the board, whose turn it is, and terminal-state detection.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::{ConfigError, MoveError};
use super::lines::{Line, LineCatalog};
use super::types::{Board, Cell, Player};

/// Mutable state of one round, plus the shared line catalog for its size.
///
/// The catalog is computed once at construction and shared read-only between
/// win detection and the bot; [`GameState::reset`] reuses it across rounds
/// of the same session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    catalog: Arc<LineCatalog>,
    current_player: Player,
    move_count: usize,
    winning_line: Option<Line>,
}

impl GameState {
    /// Creates a fresh round on an n×n board, X to move.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is outside `[2, 9]`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        let board = Board::new(size)?;
        Ok(Self {
            board,
            catalog: Arc::new(LineCatalog::generate(size)),
            current_player: Player::X,
            move_count: 0,
            winning_line: None,
        })
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The shared win-line catalog for this board size.
    pub fn catalog(&self) -> &LineCatalog {
        &self.catalog
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Largest valid 1-based position, `n²`.
    pub fn limit(&self) -> usize {
        self.size() * self.size()
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Moves played so far this round.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The line that ended the round, once [`GameState::check_winner`] has
    /// found one. Used for highlight rendering only.
    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    /// Reads a raw user token as a 1-based position.
    ///
    /// This is the validation step feeding [`GameState::apply_move`]; range
    /// checking stays with the move itself.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidInput`] when the token is not a plain
    /// unsigned integer.
    pub fn parse_position(token: &str) -> Result<usize, MoveError> {
        let digits = token.trim();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoveError::InvalidInput(token.to_string()));
        }
        digits
            .parse()
            .map_err(|_| MoveError::InvalidInput(token.to_string()))
    }

    /// Places the current player's mark at a 1-based position.
    ///
    /// Turn switching is deliberately separate ([`GameState::switch_turn`])
    /// so the caller can evaluate win and draw for the mover first.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] outside `[1, n²]`, or
    /// [`MoveError::CellOccupied`] when the target cell holds a mark.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, position: usize) -> Result<(), MoveError> {
        let limit = self.limit();
        if position < 1 || position > limit {
            return Err(MoveError::OutOfRange { position, limit });
        }
        let size = self.size();
        let (row, col) = ((position - 1) / size, (position - 1) % size);
        if let Cell::Occupied(occupied_by) = self.board.get(row, col) {
            return Err(MoveError::CellOccupied {
                position,
                occupied_by,
            });
        }
        self.board.place(row, col, self.current_player);
        self.move_count += 1;
        debug!(position, row, col, "mark placed");
        Ok(())
    }

    /// Scans the catalog for a complete line and records the first match.
    ///
    /// The check is symmetric on purpose: a line filled by either mark wins,
    /// regardless of whose turn it is. Under legal play only the mover can
    /// have completed a line, which the debug assertion pins down.
    pub fn check_winner(&mut self) -> bool {
        debug_assert!(
            !self.both_marks_complete(),
            "both marks hold a complete line"
        );
        let size = self.size();
        let winner = self
            .catalog
            .lines()
            .iter()
            .find(|line| {
                let (xs, os) = self.count_marks(line);
                xs == size || os == size
            })
            .cloned();
        match winner {
            Some(line) => {
                debug!(?line, "winning line found");
                self.winning_line = Some(line);
                true
            }
            None => false,
        }
    }

    /// True when the board is full and no winner was recorded.
    ///
    /// Evaluated only after a non-winning move; callers check
    /// [`GameState::check_winner`] first.
    pub fn check_draw(&self) -> bool {
        self.winning_line.is_none() && self.board.is_full()
    }

    /// Hands the turn to the other player. Called only while the round
    /// continues.
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Restores a fresh round on the same board size, keeping the catalog.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.move_count = 0;
        self.winning_line = None;
        debug!(size = self.size(), "round reset");
    }

    fn count_marks(&self, line: &Line) -> (usize, usize) {
        let mut xs = 0;
        let mut os = 0;
        for &(row, col) in line {
            match self.board.get(row, col) {
                Cell::Occupied(Player::X) => xs += 1,
                Cell::Occupied(Player::O) => os += 1,
                Cell::Empty => {}
            }
        }
        (xs, os)
    }

    fn both_marks_complete(&self) -> bool {
        let size = self.size();
        let mut x_done = false;
        let mut o_done = false;
        for line in self.catalog.lines() {
            let (xs, os) = self.count_marks(line);
            x_done |= xs == size;
            o_done |= os == size;
        }
        x_done && o_done
    }
}
