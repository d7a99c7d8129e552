//! TOML configuration for a match series.
//!
//! ```toml
//! [match]
//! games = 100
//! time_per_move_ms = 5000   # 0 = unlimited
//! alternate_sides = false
//!
//! [search]
//! max_depth = 7
//! endgame_depth = 10
//! endgame_empties = 10
//!
//! [log]
//! human = "fileForHuman"
//! system = "systemFile"
//! ```
//!
//! Every table and key is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use minimax_engine::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;
use crate::game_log::GameLogger;
use crate::match_runner::MatchConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    #[serde(rename = "match")]
    pub series: MatchSection,
    pub search: SearchConfig,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSection {
    pub games: u32,
    pub time_per_move_ms: u64,
    pub alternate_sides: bool,
}

impl Default for MatchSection {
    fn default() -> Self {
        let defaults = MatchConfig::default();
        Self {
            games: defaults.num_games,
            time_per_move_ms: defaults
                .time_per_move
                .map_or(0, |t| t.as_millis() as u64),
            alternate_sides: defaults.alternate_sides,
        }
    }
}

/// Game log destinations. Logging is off unless both are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub human: Option<PathBuf>,
    pub system: Option<PathBuf>,
}

impl SeriesConfig {
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let text = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn match_config(&self, verbose: bool) -> MatchConfig {
        let time_per_move = match self.series.time_per_move_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        MatchConfig {
            num_games: self.series.games,
            time_per_move,
            alternate_sides: self.series.alternate_sides,
            verbose,
            ..Default::default()
        }
    }

    /// Open the configured game logs, or a disabled logger if either path is missing.
    pub fn game_logger(&self) -> Result<GameLogger, TournamentError> {
        match (&self.log.human, &self.log.system) {
            (Some(human), Some(system)) => GameLogger::open(human, system),
            _ => Ok(GameLogger::disabled()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = SeriesConfig::from_toml("").unwrap();
        assert_eq!(config, SeriesConfig::default());
        assert_eq!(config.series.games, 100);
        assert_eq!(config.series.time_per_move_ms, 5000);

        let match_config = config.match_config(false);
        assert_eq!(match_config.time_per_move, Some(Duration::from_millis(5000)));
        assert!(!match_config.alternate_sides);
    }

    #[test]
    fn test_full_file() {
        let config = SeriesConfig::from_toml(
            r#"
            [match]
            games = 10
            time_per_move_ms = 0
            alternate_sides = true

            [search]
            max_depth = 5

            [log]
            human = "human.log"
            system = "system.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.series.games, 10);
        assert_eq!(config.search.max_depth, 5);
        assert_eq!(config.search.endgame_depth, 10);
        assert_eq!(config.log.human.as_deref(), Some(Path::new("human.log")));

        let match_config = config.match_config(true);
        assert_eq!(match_config.num_games, 10);
        assert_eq!(match_config.time_per_move, None);
        assert!(match_config.alternate_sides);
    }

    #[test]
    fn test_shipped_series_file() {
        let config = SeriesConfig::from_toml(include_str!("../../../configs/series.toml")).unwrap();
        assert_eq!(config.series, MatchSection::default());
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.log.system.as_deref(), Some(Path::new("systemFile")));
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let err = SeriesConfig::from_toml("[match]\ngames = \"many\"").unwrap_err();
        assert!(matches!(err, TournamentError::Toml(_)));
    }

    #[test]
    fn test_logger_needs_both_paths() {
        let config = SeriesConfig {
            log: LogSection {
                human: Some("human.log".into()),
                system: None,
            },
            ..Default::default()
        };
        assert!(!config.game_logger().unwrap().is_enabled());
    }
}
