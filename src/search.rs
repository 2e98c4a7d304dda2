//! Move-selection search strategies and their shared evaluator

pub mod best_first;
pub mod heuristic;
pub mod minimax;
pub mod opening;

pub use best_first::BestFirstSearcher;
pub use heuristic::{Evaluator, LineScores};
pub use minimax::MinimaxSearcher;
pub use opening::opening_move;

use crate::tictactoe::Move;

/// Outcome of a single search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Chosen move, `None` when no move is available
    pub best_move: Option<Move>,
    /// Score backing the choice: minimax value, the f-cost of the winning node
    /// for best-first, or the greedy heuristic value
    pub score: f64,
    /// Nodes visited (minimax) or generated (best-first)
    pub nodes: u64,
}
