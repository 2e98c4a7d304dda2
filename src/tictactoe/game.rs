//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Move, Player};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal state, `None` while the game is still running
    pub fn of(state: &BoardState) -> Option<GameOutcome> {
        if let Some(winner) = state.winner() {
            Some(GameOutcome::Win(winner))
        } else if state.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    current: BoardState,
}

impl Game {
    /// Start a game on an empty `size` x `size` board
    pub fn new(size: usize, first_player: Player) -> Self {
        Self::from_state(BoardState::new_with_player(size, first_player))
    }

    /// Continue a game from an arbitrary position
    pub fn from_state(initial: BoardState) -> Self {
        Game {
            outcome: GameOutcome::of(&initial),
            current: initial.clone(),
            initial,
            moves: Vec::new(),
        }
    }

    /// Play a move for whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once an outcome is recorded, or the
    /// board's error for an occupied / out-of-range cell. A rejected move
    /// leaves the game untouched.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.current = self.current.make_move(mv)?;
        self.moves.push(mv);
        self.outcome = GameOutcome::of(&self.current);

        Ok(())
    }

    /// Get current board state
    pub fn current_state(&self) -> &BoardState {
        &self.current
    }

    /// Check whether the game has finished
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
