//! Side-by-side audit of two move strategies

use serde::{Deserialize, Serialize};

use super::optimal::Solver;
use crate::{
    ports::MoveStrategy,
    tictactoe::{BoardState, Move},
};

/// A position where the two strategies chose differently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disagreement {
    /// Encoded position, e.g. `X..X...O._O`
    pub state: String,
    pub first: Option<Move>,
    pub second: Option<Move>,
}

/// Aggregate comparison of two strategies over a set of positions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DivergenceReport {
    pub first_name: String,
    pub second_name: String,
    /// Positions examined
    pub positions: usize,
    /// Positions where the chosen moves differ
    pub disagreements: usize,
    /// Moves by the first strategy that throw away game-theoretic value
    pub first_blunders: usize,
    /// Moves by the second strategy that throw away game-theoretic value
    pub second_blunders: usize,
    /// Up to `max_examples` disagreeing positions, in examination order
    pub examples: Vec<Disagreement>,
}

impl DivergenceReport {
    pub fn new(first_name: &str, second_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            second_name: second_name.to_string(),
            ..Self::default()
        }
    }

    pub fn disagreement_rate(&self) -> f64 {
        if self.positions > 0 {
            self.disagreements as f64 / self.positions as f64
        } else {
            0.0
        }
    }
}

/// Incremental comparison, one position at a time
pub struct DivergenceAudit<'a> {
    first: &'a mut dyn MoveStrategy,
    second: &'a mut dyn MoveStrategy,
    solver: Solver,
    max_examples: usize,
    report: DivergenceReport,
}

impl<'a> DivergenceAudit<'a> {
    pub fn new(
        first: &'a mut dyn MoveStrategy,
        second: &'a mut dyn MoveStrategy,
        max_examples: usize,
    ) -> Self {
        let report = DivergenceReport::new(first.name(), second.name());
        Self {
            first,
            second,
            solver: Solver::new(),
            max_examples,
            report,
        }
    }

    /// Run both strategies on `state` and record the result.
    ///
    /// Finished positions are skipped.
    pub fn examine(&mut self, state: &BoardState) {
        if state.is_terminal() {
            return;
        }
        self.report.positions += 1;

        let first = self.first.choose_move(state);
        let second = self.second.choose_move(state);

        if first.is_none_or(|mv| self.solver.is_blunder(state, mv)) {
            self.report.first_blunders += 1;
        }
        if second.is_none_or(|mv| self.solver.is_blunder(state, mv)) {
            self.report.second_blunders += 1;
        }

        if first != second {
            self.report.disagreements += 1;
            if self.report.examples.len() < self.max_examples {
                self.report.examples.push(Disagreement {
                    state: state.encode(),
                    first,
                    second,
                });
            }
        }
    }

    pub fn finish(self) -> DivergenceReport {
        self.report
    }
}

/// Compare two strategies over `states`
pub fn compare_strategies<'s>(
    first: &mut dyn MoveStrategy,
    second: &mut dyn MoveStrategy,
    states: impl IntoIterator<Item = &'s BoardState>,
    max_examples: usize,
) -> DivergenceReport {
    let mut audit = DivergenceAudit::new(first, second, max_examples);
    for state in states {
        audit.examine(state);
    }
    audit.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{BestFirstSearcher, LineScores, MinimaxSearcher};

    #[test]
    fn test_strategies_disagree_on_unblocked_threat() {
        let mut minimax = MinimaxSearcher::new(9, LineScores::default());
        let mut best_first = BestFirstSearcher::new(LineScores::default());
        let state = BoardState::from_string("X../X../.O._O").unwrap();

        let report = compare_strategies(&mut minimax, &mut best_first, [&state], 5);
        assert_eq!(report.first_name, "minimax");
        assert_eq!(report.second_name, "best-first");
        assert_eq!(report.positions, 1);
        assert_eq!(report.disagreements, 1);
        assert_eq!(report.first_blunders, 0);
        assert_eq!(report.second_blunders, 1);
        assert_eq!(
            report.examples,
            vec![Disagreement {
                state: "X..X...O._O".to_string(),
                first: Some(Move::new(2, 0)),
                second: Some(Move::new(1, 2)),
            }]
        );
    }

    #[test]
    fn test_terminal_positions_are_skipped() {
        let mut a = MinimaxSearcher::new(9, LineScores::default());
        let mut b = MinimaxSearcher::new(9, LineScores::default());
        let full = BoardState::from_string("XOX/XOO/OXX").unwrap();

        let report = compare_strategies(&mut a, &mut b, [&full], 5);
        assert_eq!(report.positions, 0);
        assert_eq!(report.disagreement_rate(), 0.0);
    }
}
