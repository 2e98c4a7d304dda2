//! Compare command - audit where minimax and best-first disagree

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::select::resolve_config;
use crate::{
    analysis::DivergenceAudit,
    cli::output::{create_progress, format_percent, print_kv, print_section, print_subsection},
    config::StrategyKind,
    search::{BestFirstSearcher, MinimaxSearcher},
    tictactoe::{BoardState, Move, Player, reachable_states},
};

#[derive(Parser, Debug)]
#[command(about = "Compare minimax and best-first over every reachable 3x3 position")]
pub struct CompareArgs {
    /// Minimax look-ahead in plies
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// JSON engine configuration (scores, node budget)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of disagreeing positions to print
    #[arg(long, default_value_t = 5)]
    pub examples: usize,

    /// Export the report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let config = resolve_config(args.config.as_ref(), Some("minimax"), args.depth)?;
    let mut minimax = MinimaxSearcher::new(config.depth_limit, config.scores);
    let mut best_first = BestFirstSearcher::new(config.scores).with_node_budget(config.node_budget);

    let states: Vec<BoardState> = reachable_states(3, &[Player::X, Player::O])
        .into_iter()
        .filter(|state| !state.is_terminal())
        .collect();

    print_section("Strategy Divergence");
    print_kv("Positions", &states.len().to_string());
    print_kv("Minimax depth", &config.depth_limit.to_string());

    let pb = create_progress(states.len() as u64, "positions");
    let mut audit = DivergenceAudit::new(&mut minimax, &mut best_first, args.examples);
    for state in &states {
        audit.examine(state);
        pb.inc(1);
    }
    pb.finish_and_clear();
    let report = audit.finish();

    print_subsection("Summary");
    print_kv(
        "Disagreements",
        &format!(
            "{} ({})",
            report.disagreements,
            format_percent(report.disagreement_rate())
        ),
    );
    print_kv(
        &format!("{} blunders", StrategyKind::Minimax),
        &report.first_blunders.to_string(),
    );
    print_kv(
        &format!("{} blunders", StrategyKind::BestFirst),
        &report.second_blunders.to_string(),
    );

    if !report.examples.is_empty() {
        print_subsection("Examples");
        for example in &report.examples {
            let show = |mv: Option<Move>| {
                mv.map_or_else(|| "none".to_string(), |mv| mv.to_string())
            };
            println!(
                "  {:14} {} {:8} {} {}",
                example.state,
                report.first_name,
                show(example.first),
                report.second_name,
                show(example.second)
            );
        }
    }

    if let Some(path) = &args.export {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nReport exported to: {}", path.display());
    }

    Ok(())
}
