//! Ports (trait boundaries) between the decision core and its callers.

pub mod strategy;

pub use strategy::MoveStrategy;
