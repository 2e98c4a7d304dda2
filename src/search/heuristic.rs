//! Positional heuristic and exact terminal evaluation

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Line, LineAnalyzer, LineCounts, Player};

/// Per-line scores, from the evaluating player's point of view.
///
/// The opponent's patterns score the negated value, so the heuristic is
/// antisymmetric in the choice of "own" player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineScores {
    /// Line fully owned
    pub complete: f64,
    /// N-1 own pieces and one empty cell
    pub near_complete: f64,
    /// One own piece, rest empty
    pub single: f64,
}

impl Default for LineScores {
    fn default() -> Self {
        Self {
            complete: 100.0,
            near_complete: 10.0,
            single: 1.0,
        }
    }
}

impl LineScores {
    /// Score one line of a `size` x `size` board.
    ///
    /// Patterns are checked in order complete, near-complete, single, own
    /// side before the opponent's; the first match wins. This matters on tiny
    /// boards where the patterns coincide (N = 2 makes near-complete and single
    /// the same shape).
    pub fn score_line(&self, counts: LineCounts, size: usize) -> f64 {
        let LineCounts {
            own,
            opponent,
            empty,
        } = counts;

        if own == size {
            self.complete
        } else if opponent == size {
            -self.complete
        } else if own + 1 == size && opponent == 0 && empty == 1 {
            self.near_complete
        } else if opponent + 1 == size && own == 0 && empty == 1 {
            -self.near_complete
        } else if own == 1 && opponent == 0 && empty + 1 == size {
            self.single
        } else if opponent == 1 && own == 0 && empty + 1 == size {
            -self.single
        } else {
            0.0
        }
    }

    /// True if every score is a finite number
    pub fn is_finite(&self) -> bool {
        self.complete.is_finite() && self.near_complete.is_finite() && self.single.is_finite()
    }
}

/// Evaluates states from the automated player's perspective
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    own: Player,
    scores: LineScores,
}

impl Evaluator {
    pub fn new(own: Player, scores: LineScores) -> Self {
        Self { own, scores }
    }

    /// The player whose advantage scores positive
    pub fn own(&self) -> Player {
        self.own
    }

    /// Sum of line scores over all 2N + 2 lines
    pub fn heuristic(&self, state: &BoardState) -> f64 {
        let size = state.size();
        Line::all(size)
            .map(|line| {
                let counts = LineAnalyzer::counts(state.cells(), size, line, self.own);
                self.scores.score_line(counts, size)
            })
            .sum()
    }

    /// Exact value of a finished game: +1 own win, -1 opponent win, 0 otherwise
    pub fn evaluate(&self, state: &BoardState) -> f64 {
        if state.is_winner(self.own) {
            1.0
        } else if state.is_winner(self.own.opponent()) {
            -1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(own: Player) -> Evaluator {
        Evaluator::new(own, LineScores::default())
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = BoardState::new(3);
        assert_eq!(eval(Player::X).heuristic(&board), 0.0);
        assert_eq!(eval(Player::O).heuristic(&board), 0.0);
    }

    #[test]
    fn test_center_piece() {
        // Center touches one row, one column and both diagonals
        let board = BoardState::from_string("....X....").unwrap();
        assert_eq!(eval(Player::X).heuristic(&board), 4.0);
        assert_eq!(eval(Player::O).heuristic(&board), -4.0);
    }

    #[test]
    fn test_threats_cancel() {
        // Both sides threaten a row; O's lone anti-diagonal piece tips it
        let board = BoardState::from_string("XX./OO./...").unwrap();
        assert_eq!(eval(Player::X).heuristic(&board), -1.0);
        assert_eq!(eval(Player::O).heuristic(&board), 1.0);
    }

    #[test]
    fn test_completed_line() {
        let board = BoardState::from_string("XXX/OO./...").unwrap();
        assert_eq!(eval(Player::X).heuristic(&board), 91.0);
        assert_eq!(eval(Player::O).heuristic(&board), -91.0);
    }

    #[test]
    fn test_small_board_prefers_near_complete() {
        // On 2x2 a single piece is also one short of a full line
        let board = BoardState::from_string("X...").unwrap();
        assert_eq!(eval(Player::X).heuristic(&board), 30.0);
    }

    #[test]
    fn test_custom_scores() {
        let scores = LineScores {
            complete: 1000.0,
            near_complete: 50.0,
            single: 0.0,
        };
        let board = BoardState::from_string("XXX/OO./...").unwrap();
        let value = Evaluator::new(Player::X, scores).heuristic(&board);
        assert_eq!(value, 1000.0 - 50.0);
    }

    #[test]
    fn test_evaluate_terminal() {
        let x_wins = BoardState::from_string("XXX/OO./...").unwrap();
        assert_eq!(eval(Player::X).evaluate(&x_wins), 1.0);
        assert_eq!(eval(Player::O).evaluate(&x_wins), -1.0);

        let draw = BoardState::from_string("XOX/XOO/OXX").unwrap();
        assert_eq!(eval(Player::X).evaluate(&draw), 0.0);
    }
}
