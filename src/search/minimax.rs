//! Depth-bounded minimax with alpha-beta pruning
//!
//! The automated player (the side to move at the root) maximizes, its
//! opponent minimizes. Leaves are scored with [`Evaluator::evaluate`] when the
//! game is over and with [`Evaluator::heuristic`] at the depth cutoff.
//!
//! With a depth limit of at least the number of empty cells every leaf is
//! terminal, so the search is exact and the chosen move never loses.

use tracing::debug;

use super::{
    SearchResult,
    heuristic::{Evaluator, LineScores},
};
use crate::{
    ports::MoveStrategy,
    tictactoe::{BoardState, Move},
};

/// Alpha-beta searcher
#[derive(Debug, Clone)]
pub struct MinimaxSearcher {
    depth_limit: usize,
    scores: LineScores,
    nodes: u64,
}

impl MinimaxSearcher {
    /// Create a searcher looking `depth_limit` plies ahead (at least one).
    pub fn new(depth_limit: usize, scores: LineScores) -> Self {
        Self {
            depth_limit: depth_limit.max(1),
            scores,
            nodes: 0,
        }
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Search `state` for the side to move.
    ///
    /// Root ties go to the first move in row-major order reaching the best
    /// value.
    pub fn search(&mut self, state: &BoardState) -> SearchResult {
        self.nodes = 0;
        let eval = Evaluator::new(state.to_move, self.scores);

        let mut best_move = None;
        let mut best_value = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for (next_state, mv) in state.successors() {
            let value = self.alpha_beta(&eval, &next_state, self.depth_limit - 1, alpha, beta);
            if best_move.is_none() || value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_value);
        }

        debug!(
            nodes = self.nodes,
            depth = self.depth_limit,
            score = best_value,
            "minimax search finished"
        );

        SearchResult {
            best_move,
            score: best_value,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(
        &mut self,
        eval: &Evaluator,
        state: &BoardState,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;

        if state.is_terminal() {
            return eval.evaluate(state);
        }
        if depth == 0 {
            return eval.heuristic(state);
        }

        if state.to_move == eval.own() {
            let mut value = f64::NEG_INFINITY;
            for (next_state, _) in state.successors() {
                value = value.max(self.alpha_beta(eval, &next_state, depth - 1, alpha, beta));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for (next_state, _) in state.successors() {
                value = value.min(self.alpha_beta(eval, &next_state, depth - 1, alpha, beta));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl MoveStrategy for MinimaxSearcher {
    fn choose_move(&mut self, state: &BoardState) -> Option<Move> {
        self.search(state).best_move
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    fn searcher() -> MinimaxSearcher {
        MinimaxSearcher::new(9, LineScores::default())
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move completes the top row
        let state = BoardState::from_string("OO./XX./X.._O").unwrap();
        assert_eq!(searcher().choose_move(&state), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_blocks_column_threat() {
        // X threatens the left column, O has no win of its own
        let state = BoardState::from_string("X../X../.O._O").unwrap();
        assert_eq!(searcher().choose_move(&state), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let state = BoardState::from_string("XOX/XOO/OXX").unwrap();
        let result = searcher().search(&state);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_first_corner_against_center() {
        // Every corner draws; the first in row-major order wins the tie
        let state = BoardState::from_string(".../.X./...").unwrap();
        assert_eq!(searcher().choose_move(&state), Some(Move::new(0, 0)));
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_than_full_tree() {
        let mut searcher = searcher();
        let result = searcher.search(&BoardState::new(3));
        // The unpruned tree has 549,945 nodes below the root
        assert!(result.nodes < 549_945);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_shallow_depth_uses_heuristic() {
        let mut searcher = MinimaxSearcher::new(1, LineScores::default());
        let state = BoardState::new_with_player(3, Player::O);
        let result = searcher.search(&state);
        // One ply: the center piece touches four lines
        assert_eq!(result.best_move, Some(Move::new(1, 1)));
        assert_eq!(result.score, 4.0);
    }
}
