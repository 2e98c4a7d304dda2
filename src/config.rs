//! Engine configuration

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::MoveStrategy,
    search::{BestFirstSearcher, LineScores, MinimaxSearcher},
};

/// Which search strategy picks moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Depth-bounded minimax with alpha-beta pruning
    #[default]
    Minimax,
    /// Heuristic best-first search toward a win
    BestFirst,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::BestFirst => "best-first",
        };
        f.write_str(label)
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "alpha-beta" | "alphabeta" => Ok(StrategyKind::Minimax),
            "best-first" | "best_first" | "bestfirst" | "a-star" | "astar" => {
                Ok(StrategyKind::BestFirst)
            }
            _ => Err(Error::ParseStrategy {
                input: s.to_string(),
                expected: "minimax, best-first".to_string(),
            }),
        }
    }
}

/// Configuration for the decision engine.
///
/// # Examples
///
/// ```
/// use noughts::config::{EngineConfig, StrategyKind};
///
/// let config = EngineConfig::new(StrategyKind::BestFirst)
///     .with_depth_limit(4)
///     .with_node_budget(Some(10_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strategy used once the opening shortcut no longer applies
    pub strategy: StrategyKind,
    /// Minimax look-ahead in plies
    pub depth_limit: usize,
    /// Line-scoring table shared by both strategies
    pub scores: LineScores,
    /// Cap on best-first expansions; `None` searches until the open set drains
    pub node_budget: Option<usize>,
    /// Play the fixed opening move on an empty board
    pub opening_shortcut: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

impl EngineConfig {
    /// Create a configuration for `strategy`.
    ///
    /// Uses default values for other parameters:
    /// - Depth limit: 9 (exhaustive on 3x3)
    /// - Scores: 100 / 10 / 1
    /// - Node budget: none
    /// - Opening shortcut: on
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            depth_limit: 9,
            scores: LineScores::default(),
            node_budget: None,
            opening_shortcut: true,
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_scores(mut self, scores: LineScores) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_node_budget(mut self, node_budget: Option<usize>) -> Self {
        self.node_budget = node_budget;
        self
    }

    pub fn with_opening_shortcut(mut self, enabled: bool) -> Self {
        self.opening_shortcut = enabled;
        self
    }

    /// Check that the configuration describes a usable engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero depth limit or a
    /// non-finite line score.
    pub fn validate(&self) -> Result<()> {
        if self.depth_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "depth_limit must be at least 1".to_string(),
            });
        }
        if !self.scores.is_finite() {
            return Err(Error::InvalidConfiguration {
                message: format!("line scores must be finite, got {:?}", self.scores),
            });
        }
        Ok(())
    }

    /// Build the configured strategy
    pub fn build_strategy(&self) -> Box<dyn MoveStrategy> {
        match self.strategy {
            StrategyKind::Minimax => Box::new(MinimaxSearcher::new(self.depth_limit, self.scores)),
            StrategyKind::BestFirst => {
                Box::new(BestFirstSearcher::new(self.scores).with_node_budget(self.node_budget))
            }
        }
    }

    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config '{}'", path.display()),
            source,
        })?;
        let config: EngineConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "minimax".parse::<StrategyKind>().unwrap(),
            StrategyKind::Minimax
        );
        assert_eq!(
            " Best-First ".parse::<StrategyKind>().unwrap(),
            StrategyKind::BestFirst
        );
        let err = "mcts".parse::<StrategyKind>().unwrap_err();
        assert!(err.to_string().contains("minimax, best-first"));
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in [StrategyKind::Minimax, StrategyKind::BestFirst] {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = EngineConfig::default().with_depth_limit(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_scores() {
        let config = EngineConfig::default().with_scores(LineScores {
            complete: f64::NAN,
            ..LineScores::default()
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"strategy": "best-first", "scores": {"single": 2.0}}"#)
                .unwrap();
        assert_eq!(config.strategy, StrategyKind::BestFirst);
        assert_eq!(config.depth_limit, 9);
        assert_eq!(config.scores.complete, 100.0);
        assert_eq!(config.scores.single, 2.0);
        assert!(config.opening_shortcut);
    }

    #[test]
    fn test_build_strategy_names() {
        assert_eq!(EngineConfig::default().build_strategy().name(), "minimax");
        let config = EngineConfig::new(StrategyKind::BestFirst);
        assert_eq!(config.build_strategy().name(), "best-first");
    }
}
