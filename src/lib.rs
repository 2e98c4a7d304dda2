//! Adversarial move selection for N-in-a-line grid games
//!
//! This crate provides:
//! - An N x N board model with move generation and win detection
//! - Depth-bounded minimax with alpha-beta pruning
//! - Heuristic best-first search toward a win
//! - A decision engine that validates grid snapshots and picks a move
//! - Match play and an exact solver for auditing strategies

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use config::{EngineConfig, StrategyKind};
pub use engine::{Engine, select_move};
pub use error::{Error, Result};
pub use ports::MoveStrategy;
