//! Select command - pick one move for a position

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_player_token;
use crate::{
    cli::output::{print_board, print_kv, print_section},
    config::{EngineConfig, StrategyKind},
    engine::Engine,
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Select a move for a board position")]
pub struct SelectArgs {
    /// Board as text, rows optionally separated by '/', e.g. "X../.O./..."
    pub board: String,

    /// Automated player (`x` or `o`); inferred from the board if omitted
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Search strategy (`minimax` or `best-first`)
    #[arg(long, short = 's')]
    pub strategy: Option<String>,

    /// Minimax look-ahead in plies
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// JSON engine configuration; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Merge the optional config file with command-line overrides
pub(crate) fn resolve_config(
    path: Option<&PathBuf>,
    strategy: Option<&str>,
    depth: Option<usize>,
) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(strategy) = strategy {
        config = config.with_strategy(strategy.parse::<StrategyKind>()?);
    }
    if let Some(depth) = depth {
        config = config.with_depth_limit(depth);
    }
    config.validate()?;
    Ok(config)
}

pub fn execute(args: SelectArgs) -> Result<()> {
    let config = resolve_config(args.config.as_ref(), args.strategy.as_deref(), args.depth)?;

    let mut state = BoardState::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    if let Some(token) = &args.player {
        state.to_move = parse_player_token(token, "--player")?;
    }

    let mut engine = Engine::new(config)?;
    let choice = engine.select_move(&state.rows(), state.to_move)?;

    print_section("Move Selection");
    print_board(&state);
    println!();
    print_kv("Player", &state.to_move.to_string());
    print_kv("Strategy", engine.strategy_name());
    match choice {
        Some(mv) => print_kv("Move", &mv.to_string()),
        None => print_kv("Move", "no move (game is over)"),
    }

    Ok(())
}
