//! Move-selection port - abstraction over search strategies
//!
//! Every way of picking the automated player's move (alpha-beta minimax,
//! best-first search, baselines) implements [`MoveStrategy`], so the engine,
//! match play and analysis can swap strategies without knowing which one runs.

use crate::tictactoe::{BoardState, Move};

/// A move-selection strategy
///
/// The player to move in the supplied state is the automated player: all
/// scores are computed from its point of view.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::MoveStrategy,
///     search::{LineScores, MinimaxSearcher},
///     tictactoe::{BoardState, Move},
/// };
///
/// let mut strategy = MinimaxSearcher::new(9, LineScores::default());
/// let state = BoardState::from_string("XX./OO./..._X").unwrap();
/// assert_eq!(strategy.choose_move(&state), Some(Move::new(0, 2)));
/// ```
pub trait MoveStrategy: Send {
    /// Choose a move for `state.to_move`.
    ///
    /// Returns `None` only when the strategy has no move to offer, which for
    /// the built-in searchers means the board is full (or, for best-first,
    /// the automated player has already won).
    fn choose_move(&mut self, state: &BoardState) -> Option<Move>;

    /// Human-readable strategy name
    fn name(&self) -> &str;
}
