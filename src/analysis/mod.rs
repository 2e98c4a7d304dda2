//! Analysis tools for auditing move strategies
//!
//! An exact solver supplies ground truth on small boards; the divergence
//! audit runs two strategies side by side and scores both against it.

pub mod divergence;
pub mod optimal;

pub use divergence::{Disagreement, DivergenceAudit, DivergenceReport, compare_strategies};
pub use optimal::Solver;
