//! Command-line interface for the noughts engine
//!
//! Subcommands pick a single move, play matches between strategies, and
//! audit where two strategies disagree.

pub mod commands;
pub mod output;
