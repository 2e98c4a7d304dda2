//! Head-to-head matches between two strategies

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::MoveStrategy,
    tictactoe::{Game, GameOutcome, Move, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Board side length
    pub size: usize,

    /// Who opens the first game
    pub first_player: Player,

    /// Swap the opening player after every game
    pub alternate: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            size: 3,
            first_player: Player::X,
            alternate: true,
        }
    }
}

impl MatchConfig {
    /// Opening player of game `index`
    pub fn opener(&self, index: usize) -> Player {
        if self.alternate && index % 2 == 1 {
            self.first_player.opponent()
        } else {
            self.first_player
        }
    }

    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "board size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Condensed record of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub opener: Player,
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

/// Tally of a match, from the point of view of the strategy playing X
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Strategy playing X
    pub first: String,

    /// Strategy playing O
    pub second: String,

    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,

    pub games: Vec<GameSummary>,
}

impl MatchResult {
    fn new(first: &str, second: &str, games: Vec<GameSummary>) -> Self {
        let count = |outcome: GameOutcome| games.iter().filter(|g| g.outcome == outcome).count();
        let wins = count(GameOutcome::Win(Player::X));
        let losses = count(GameOutcome::Win(Player::O));
        let draws = count(GameOutcome::Draw);
        let total_games = games.len();
        let rate = |n: usize| {
            if total_games > 0 {
                n as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            first: first.to_string(),
            second: second.to_string(),
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            games,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create '{}'", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Play one game to completion.
///
/// # Errors
///
/// Returns [`Error::NoMoveSelected`] if a strategy passes on an unfinished
/// board, or the board's error if it picks an illegal cell.
pub fn play_game(
    size: usize,
    opener: Player,
    x: &mut dyn MoveStrategy,
    o: &mut dyn MoveStrategy,
) -> Result<Game> {
    let mut game = Game::new(size, opener);

    while !game.is_over() {
        let state = game.current_state().clone();
        let strategy: &mut dyn MoveStrategy = match state.to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = strategy
            .choose_move(&state)
            .ok_or_else(|| Error::NoMoveSelected {
                strategy: strategy.name().to_string(),
            })?;
        game.play(mv)?;
    }

    Ok(game)
}

/// Play a match, `first` as X against `second` as O
pub fn run_match(
    config: &MatchConfig,
    first: &mut dyn MoveStrategy,
    second: &mut dyn MoveStrategy,
) -> Result<MatchResult> {
    run_match_with(config, first, second, |_, _| {})
}

/// Like [`run_match`], calling `on_game` after each finished game
pub fn run_match_with<F>(
    config: &MatchConfig,
    first: &mut dyn MoveStrategy,
    second: &mut dyn MoveStrategy,
    mut on_game: F,
) -> Result<MatchResult>
where
    F: FnMut(usize, &GameSummary),
{
    config.validate()?;

    let mut games = Vec::with_capacity(config.games);
    for index in 0..config.games {
        let opener = config.opener(index);
        let game = play_game(config.size, opener, first, second)?;
        // `play_game` only returns once an outcome is recorded
        let outcome = game.outcome.unwrap_or(GameOutcome::Draw);
        debug!(game = index, %opener, ?outcome, plies = game.moves.len(), "game finished");

        let summary = GameSummary {
            opener,
            moves: game.moves,
            outcome,
        };
        on_game(index, &summary);
        games.push(summary);
    }

    let result = MatchResult::new(first.name(), second.name(), games);
    info!(
        first = %result.first,
        second = %result.second,
        wins = result.wins,
        draws = result.draws,
        losses = result.losses,
        "match finished"
    );
    Ok(result)
}
