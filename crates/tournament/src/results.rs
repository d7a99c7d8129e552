//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::{MatchConfig, MatchResult};

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results in the order they were played
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Series settings recorded alongside the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    /// Per-move budget in milliseconds (None = unlimited)
    pub time_per_move_ms: Option<u64>,
    pub alternate_sides: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::from(&MatchConfig::default())
    }
}

impl From<&MatchConfig> for TournamentConfig {
    fn from(config: &MatchConfig) -> Self {
        Self {
            games_per_match: config.num_games,
            time_per_move_ms: config.time_per_move.map(|t| t.as_millis() as u64),
            alternate_sides: config.alternate_sides,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let time = match self.config.time_per_move_ms {
            Some(ms) => format!("{ms} ms/move"),
            None => "unlimited time".to_string(),
        };
        let sides = if self.config.alternate_sides {
            "alternating sides"
        } else {
            "fixed sides"
        };

        // Writing into a String cannot fail.
        let _ = writeln!(report, "=== Tournament: {} ===\n", self.name);
        let _ = writeln!(report, "Participants: {}", self.participants.join(", "));
        let _ = writeln!(
            report,
            "Config: {} games/match, {time}, {sides}\n",
            self.config.games_per_match
        );

        report.push_str("Results:\n");
        let _ = writeln!(
            report,
            "{:<16} vs {:<16} {:>5}-{:<5}-{:<5} {:>4} {:>4} {:>4}",
            "Engine 1", "Engine 2", "W", "L", "D", "B", "W", "T"
        );
        report.push_str(&"-".repeat(72));
        report.push('\n');

        for entry in &self.matches {
            let r = &entry.result;
            let _ = writeln!(
                report,
                "{:<16} vs {:<16} {:>5}-{:<5}-{:<5} {:>4} {:>4} {:>4}",
                entry.engine1, entry.engine2, r.wins, r.losses, r.draws, r.black_wins, r.white_wins, r.ties
            );
            if r.forfeits > 0 {
                let _ = writeln!(report, "  ({} games decided by forfeit)", r.forfeits);
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TournamentResults {
        let mut results = TournamentResults::new(
            "minimax vs random",
            vec!["minimax".into(), "random".into()],
            TournamentConfig::default(),
        );
        results.add_match(
            "minimax",
            "random",
            MatchResult {
                wins: 97,
                losses: 2,
                draws: 1,
                black_wins: 97,
                white_wins: 2,
                ties: 1,
                forfeits: 0,
            },
        );
        results
    }

    #[test]
    fn test_default_config_matches_default_series() {
        let config = TournamentConfig::default();
        assert_eq!(config.games_per_match, 100);
        assert_eq!(config.time_per_move_ms, Some(5000));
        assert!(!config.alternate_sides);
    }

    #[test]
    fn test_report_contents() {
        let report = sample().generate_report();
        assert!(report.contains("=== Tournament: minimax vs random ==="));
        assert!(report.contains("100 games/match, 5000 ms/move, fixed sides"));
        assert!(report.contains("   97-2    -1    "));
        assert!(!report.contains("forfeit"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("othello-results-{}.json", std::process::id()));
        let results = sample();
        results.save(&path).unwrap();
        let loaded = TournamentResults::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, results);
    }

    #[test]
    fn test_load_errors() {
        let missing = std::env::temp_dir().join("othello-results-does-not-exist.json");
        assert!(matches!(
            TournamentResults::load(&missing),
            Err(TournamentError::Io { .. })
        ));

        let path = std::env::temp_dir().join(format!("othello-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = TournamentResults::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, TournamentError::Json(_)));
    }
}
