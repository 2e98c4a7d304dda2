//! Match play between move strategies
//!
//! Two strategies alternate over a series of games; results are tallied from
//! the first strategy's point of view and can be exported as JSON.

pub mod baseline;
pub mod matchup;

pub use baseline::RandomStrategy;
pub use matchup::{GameSummary, MatchConfig, MatchResult, play_game, run_match, run_match_with};

pub use crate::ports::MoveStrategy;
