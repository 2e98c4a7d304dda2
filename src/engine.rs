//! Decision engine: the boundary between a game front end and the search core
//!
//! A caller hands over a grid snapshot and the automated player's symbol and
//! receives a move (or an explicit absence). The engine validates the snapshot,
//! applies the opening shortcut and otherwise delegates to the configured
//! [`MoveStrategy`].

use tracing::{debug, warn};

use crate::{
    Result,
    config::EngineConfig,
    ports::MoveStrategy,
    search::opening_move,
    tictactoe::{BoardState, Cell, Move, Player},
};

/// Move-selection engine
pub struct Engine {
    config: EngineConfig,
    strategy: Box<dyn MoveStrategy>,
}

impl Engine {
    /// Create an engine running the strategy named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the configuration
    /// fails validation.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let strategy = config.build_strategy();
        Ok(Self { config, strategy })
    }

    /// Create an engine around a caller-supplied strategy
    pub fn with_strategy(config: EngineConfig, strategy: Box<dyn MoveStrategy>) -> Self {
        Self { config, strategy }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name of the strategy behind this engine
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Pick the automated player's move on `grid`.
    ///
    /// Returns `Ok(None)` when the grid has no empty cell. A grid that already
    /// holds a winning line is a caller error, but it can legitimately arrive
    /// one step late, so it also yields `Ok(None)` instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGridShape`] for an empty or non-square grid.
    pub fn select_move(&mut self, grid: &[Vec<Cell>], automated: Player) -> Result<Option<Move>> {
        let state = BoardState::from_rows(grid, automated)?;
        Ok(self.select_move_for_state(&state))
    }

    /// Pick a move for `state.to_move` on an already validated state
    pub fn select_move_for_state(&mut self, state: &BoardState) -> Option<Move> {
        if state.is_full() {
            debug!("board is full, no move to select");
            return None;
        }
        if let Some(winner) = state.winner() {
            warn!(%winner, "move requested on a finished game");
            return None;
        }

        if self.config.opening_shortcut {
            if let Some(mv) = opening_move(state) {
                debug!(%mv, "opening shortcut");
                return Some(mv);
            }
        }

        let mv = self.strategy.choose_move(state);
        debug!(
            strategy = self.strategy.name(),
            player = %state.to_move,
            mv = ?mv,
            "selected move"
        );
        mv
    }
}

impl MoveStrategy for Engine {
    fn choose_move(&mut self, state: &BoardState) -> Option<Move> {
        self.select_move_for_state(state)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

/// Pick the automated player's move with the default configuration.
///
/// # Examples
///
/// ```
/// use noughts::{
///     select_move,
///     tictactoe::{Cell, Move, Player},
/// };
///
/// let grid = vec![vec![Cell::Empty; 3]; 3];
/// assert_eq!(select_move(&grid, Player::O).unwrap(), Some(Move::new(1, 1)));
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::InvalidGridShape`] for an empty or non-square grid.
pub fn select_move(grid: &[Vec<Cell>], automated: Player) -> Result<Option<Move>> {
    Engine::new(EngineConfig::default())?.select_move(grid, automated)
}
