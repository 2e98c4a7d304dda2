//! Play command - run a match between two strategies

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{create_strategy, parse_player_token, select::resolve_config};
use crate::{
    cli::output::{create_progress, format_percent, print_kv, print_section, print_subsection},
    pipeline::{MatchConfig, run_match_with},
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a match between two strategies")]
pub struct PlayArgs {
    /// Strategy playing X (`minimax`, `best-first` or `random`)
    #[arg(long, default_value = "minimax")]
    pub first: String,

    /// Strategy playing O (`minimax`, `best-first` or `random`)
    #[arg(long, default_value = "random")]
    pub second: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board side length
    #[arg(long, default_value_t = 3)]
    pub size: usize,

    /// Which token opens the first game (`x` or `o`)
    #[arg(long = "first-player", default_value = "x")]
    pub first_player: String,

    /// Keep the same opener for every game
    #[arg(long)]
    pub no_alternate: bool,

    /// Minimax look-ahead in plies
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// JSON engine configuration shared by both engine strategies
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Export the match result as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let base = resolve_config(args.config.as_ref(), None, args.depth)?;
    let mut first = create_strategy(&args.first, &base, args.seed)?;
    // Offset so two random players never mirror each other
    let mut second = create_strategy(&args.second, &base, args.seed.map(|s| s.wrapping_add(1)))?;

    let config = MatchConfig {
        games: args.games,
        size: args.size,
        first_player: parse_player_token(&args.first_player, "--first-player")?,
        alternate: !args.no_alternate,
    };

    print_section("Match");
    print_kv("X", first.name());
    print_kv("O", second.name());
    print_kv("Games", &config.games.to_string());
    print_kv("Board", &format!("{0}x{0}", config.size));

    let pb = create_progress(config.games as u64, "games");
    let mut wins = 0usize;
    let result = run_match_with(&config, first.as_mut(), second.as_mut(), |_, summary| {
        if summary.outcome == GameOutcome::Win(Player::X) {
            wins += 1;
        }
        pb.inc(1);
        pb.set_message(format!("{wins} X wins"));
    })?;
    pb.finish_and_clear();

    print_subsection(&format!("Results for {} (X)", result.first));
    print_kv("Wins", &format!("{} ({})", result.wins, format_percent(result.win_rate)));
    print_kv("Draws", &format!("{} ({})", result.draws, format_percent(result.draw_rate)));
    print_kv("Losses", &format!("{} ({})", result.losses, format_percent(result.loss_rate)));

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
