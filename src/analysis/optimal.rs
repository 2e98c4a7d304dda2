//! Exact game-theoretic values by memoized exhaustive search

use fxhash::FxHashMap;

use crate::tictactoe::{BoardState, Move, Player};

/// Exact solver for small boards.
///
/// Values are from X's point of view: +1 X wins, -1 O wins, 0 draw, all
/// under perfect play by both sides. Results are memoized across calls.
#[derive(Debug, Default)]
pub struct Solver {
    memo: FxHashMap<BoardState, i32>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `state` for X under perfect play
    pub fn value(&mut self, state: &BoardState) -> i32 {
        if let Some(&value) = self.memo.get(state) {
            return value;
        }

        let value = if let Some(winner) = state.winner() {
            match winner {
                Player::X => 1,
                Player::O => -1,
            }
        } else if state.is_full() {
            0
        } else {
            let children = state.successors().into_iter().map(|(next, _)| self.value(&next));
            match state.to_move {
                Player::X => children.max().unwrap_or(0),
                Player::O => children.min().unwrap_or(0),
            }
        };

        self.memo.insert(state.clone(), value);
        value
    }

    /// Value of `state` for `player` under perfect play
    pub fn value_for(&mut self, state: &BoardState, player: Player) -> i32 {
        match player {
            Player::X => self.value(state),
            Player::O => -self.value(state),
        }
    }

    /// All moves preserving the mover's game-theoretic value, row-major
    pub fn optimal_moves(&mut self, state: &BoardState) -> Vec<Move> {
        if state.is_terminal() {
            return Vec::new();
        }
        let mover = state.to_move;
        let best = self.value_for(state, mover);
        state
            .successors()
            .into_iter()
            .filter(|(next, _)| self.value_for(next, mover) == best)
            .map(|(_, mv)| mv)
            .collect()
    }

    /// Does playing `mv` give away value the mover could have kept?
    pub fn is_blunder(&mut self, state: &BoardState, mv: Move) -> bool {
        let mover = state.to_move;
        match state.make_move(mv) {
            Ok(next) => self.value_for(&next, mover) < self.value_for(state, mover),
            Err(_) => true,
        }
    }

    /// Number of memoized states
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut solver = Solver::new();
        assert_eq!(solver.value(&BoardState::new(3)), 0);
    }

    #[test]
    fn test_terminal_values() {
        let mut solver = Solver::new();
        let x_wins = BoardState::from_string("XXX/OO./...").unwrap();
        assert_eq!(solver.value(&x_wins), 1);
        assert_eq!(solver.value_for(&x_wins, Player::O), -1);
    }

    #[test]
    fn test_edge_reply_to_center_loses() {
        let mut solver = Solver::new();
        let state = BoardState::from_string(".../.X./...").unwrap();
        assert!(solver.is_blunder(&state, Move::new(0, 1)));
        assert!(!solver.is_blunder(&state, Move::new(0, 0)));
        assert_eq!(
            solver.optimal_moves(&state),
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(2, 0),
                Move::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_missed_block_is_a_blunder() {
        let mut solver = Solver::new();
        let state = BoardState::from_string("X../X../.O._O").unwrap();
        assert!(solver.is_blunder(&state, Move::new(1, 2)));
        assert!(!solver.is_blunder(&state, Move::new(2, 0)));
    }
}
