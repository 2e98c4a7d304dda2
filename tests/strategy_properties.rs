//! Behavioral guarantees of the two search strategies
//!
//! Minimax with a full-depth horizon is checked against the exact solver on
//! every reachable 3x3 position. Best-first is only held to legality and to
//! taking immediate wins; where it differs from minimax is asserted, not
//! treated as a defect.

use noughts::{
    analysis::{Solver, compare_strategies},
    ports::MoveStrategy,
    search::{BestFirstSearcher, LineScores, MinimaxSearcher},
    tictactoe::{BoardState, Move, Player, reachable_states},
};

fn open_states() -> Vec<BoardState> {
    reachable_states(3, &[Player::X, Player::O])
        .into_iter()
        .filter(|state| !state.is_terminal())
        .collect()
}

fn immediate_wins(state: &BoardState) -> Vec<Move> {
    state
        .successors()
        .into_iter()
        .filter(|(next, _)| next.is_winner(state.to_move))
        .map(|(_, mv)| mv)
        .collect()
}

mod minimax {
    use super::*;

    #[test]
    fn test_full_depth_never_gives_away_value() {
        let mut searcher = MinimaxSearcher::new(9, LineScores::default());
        let mut solver = Solver::new();

        for state in open_states() {
            let mv = searcher
                .choose_move(&state)
                .unwrap_or_else(|| panic!("no move on open state {}", state.encode()));
            assert!(
                !solver.is_blunder(&state, mv),
                "minimax played {mv} on {}",
                state.encode()
            );
        }
    }

    #[test]
    fn test_blocks_opponent_column() {
        // X holds two of the left column, O has no immediate win
        let state = BoardState::from_string("X../X../.O._O").unwrap();
        assert!(immediate_wins(&state).is_empty());
        let mut searcher = MinimaxSearcher::new(9, LineScores::default());
        assert_eq!(searcher.choose_move(&state), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_depth_is_configuration() {
        let state = BoardState::from_string("X../X../.O._O").unwrap();
        let mut shallow = MinimaxSearcher::new(1, LineScores::default());
        let mut deep = MinimaxSearcher::new(2, LineScores::default());
        assert_eq!(shallow.depth_limit(), 1);
        // Two plies see X completing the column
        assert_eq!(deep.choose_move(&state), Some(Move::new(2, 0)));
        assert!(shallow.choose_move(&state).is_some());
    }
}

mod best_first {
    use super::*;

    #[test]
    fn test_legal_move_and_immediate_win() {
        let mut searcher = BestFirstSearcher::new(LineScores::default());

        for state in open_states() {
            let mv = searcher
                .choose_move(&state)
                .unwrap_or_else(|| panic!("no move on open state {}", state.encode()));
            let next = state
                .make_move(mv)
                .unwrap_or_else(|err| panic!("illegal move {mv} on {}: {err}", state.encode()));

            if !immediate_wins(&state).is_empty() {
                assert!(
                    next.is_winner(state.to_move),
                    "best-first missed a win on {}",
                    state.encode()
                );
            }
        }
    }

    #[test]
    fn test_may_leave_threat_unblocked() {
        let state = BoardState::from_string("X../X../.O._O").unwrap();
        let mut searcher = BestFirstSearcher::new(LineScores::default());
        assert_ne!(searcher.choose_move(&state), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_budgeted_search_stays_legal() {
        let mut searcher = BestFirstSearcher::new(LineScores::default()).with_node_budget(Some(3));
        for board in ["........._X", "X...O...._X", "XO./.X./..O_X"] {
            let state = BoardState::from_string(board).unwrap();
            let mv = searcher.choose_move(&state).unwrap();
            assert!(state.make_move(mv).is_ok(), "{board}");
        }
    }
}

mod divergence {
    use super::*;

    #[test]
    fn test_only_minimax_is_blunder_free() {
        let states = open_states();
        let mut minimax = MinimaxSearcher::new(9, LineScores::default());
        let mut best_first = BestFirstSearcher::new(LineScores::default());

        let report = compare_strategies(&mut minimax, &mut best_first, &states, 10);
        assert_eq!(report.positions, states.len());
        assert_eq!(report.first_blunders, 0);
        assert!(report.second_blunders > 0);
        assert!(report.disagreements > 0);
        assert_eq!(report.examples.len(), 10);
    }
}
