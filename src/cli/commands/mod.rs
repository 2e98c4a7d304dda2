//! Subcommand implementations and the argument parsing they share

pub mod compare;
pub mod play;
pub mod select;

use anyhow::{Result, anyhow};

use crate::{
    config::{EngineConfig, StrategyKind},
    engine::Engine,
    pipeline::RandomStrategy,
    ports::MoveStrategy,
    tictactoe::Player,
};

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Player::X),
        "o" | "second" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Build a match participant: `random` or any engine strategy name.
///
/// Engine strategies run behind [`Engine`], so they get the same validation
/// and opening shortcut as a front end would.
pub(crate) fn create_strategy(
    spec: &str,
    base: &EngineConfig,
    seed: Option<u64>,
) -> Result<Box<dyn MoveStrategy>> {
    if spec.trim().eq_ignore_ascii_case("random") {
        let strategy = match seed {
            Some(seed) => RandomStrategy::with_seed(seed),
            None => RandomStrategy::new(),
        };
        return Ok(Box::new(strategy));
    }

    let kind: StrategyKind = spec
        .parse()
        .map_err(|err| anyhow!("{err}. 'random' is also accepted here"))?;
    let engine = Engine::new(base.clone().with_strategy(kind))?;
    Ok(Box::new(engine))
}
