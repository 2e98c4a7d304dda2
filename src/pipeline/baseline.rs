//! Baseline opponents

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    ports::MoveStrategy,
    tictactoe::{BoardState, Move},
};

/// Plays a uniformly random empty cell
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy, seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn choose_move(&mut self, state: &BoardState) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }
        let moves = state.empty_moves();
        if moves.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..moves.len());
        Some(moves[index])
    }

    fn name(&self) -> &str {
        "random"
    }
}
