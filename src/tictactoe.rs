//! N-in-a-line game model on an N x N grid

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{BoardState, Cell, Fingerprint, Move, Player};
pub use game::{Game, GameOutcome};
pub use game_tree::reachable_states;
pub use lines::{Line, LineAnalyzer, LineCounts};
