//! Match runner for playing games between engines

use othello_core::{Engine, Position, SearchLimits, Side, DEFAULT_MOVE_TIME};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::game_log::GameLogger;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Whether engine 1 switches colour every game
    pub alternate_sides: bool,
    /// Log every finished game at info level
    pub verbose: bool,
    /// Board every game starts from, Black to move
    pub start: Position,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            time_per_move: Some(DEFAULT_MOVE_TIME),
            alternate_sides: false,
            verbose: true,
            start: Position::startpos(),
        }
    }
}

impl MatchConfig {
    /// Fresh limits for one move (each search starts its own clock)
    fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            move_time: self.time_per_move,
        }
    }
}

/// Result of a single game from engine 1's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// How a single game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// `None` on a tie
    pub winner: Option<Side>,
    /// The side that lost by failing to produce a legal move, if any
    pub forfeit: Option<Side>,
    pub black_disks: u32,
    pub white_disks: u32,
    /// Moves actually played (passes excluded)
    pub moves: u32,
    pub final_position: Position,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Games won by whoever played Black
    pub black_wins: u32,
    /// Games won by whoever played White
    pub white_wins: u32,
    /// Games ending with equal disk counts
    pub ties: u32,
    /// Games decided by a missing or illegal move
    pub forfeits: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Count one game in which engine 1 played `engine1_side`.
    pub fn record(&mut self, game: &GameRecord, engine1_side: Side) -> GameResult {
        let result = match game.winner {
            Some(side) if side == engine1_side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        };
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        match game.winner {
            Some(Side::Black) => self.black_wins += 1,
            Some(Side::White) => self.white_wins += 1,
            None => self.ties += 1,
        }
        if game.forfeit.is_some() {
            self.forfeits += 1;
        }
        result
    }

    /// The colour tally, `B: <n> W: <n> T: <n>`.
    pub fn colour_summary(&self) -> String {
        format!("B: {} W: {} T: {}", self.black_wins, self.white_wins, self.ties)
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
    logger: GameLogger,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_logger(config, GameLogger::disabled())
    }

    pub fn with_logger(config: MatchConfig, logger: GameLogger) -> Self {
        Self { config, logger }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Engine 1 is player 1 and starts as Black. Returns the result from
    /// engine1's perspective.
    pub fn run_match(&mut self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_side = if self.config.alternate_sides && game_num % 2 == 1 {
                Side::White
            } else {
                Side::Black
            };
            let game_id = game_num + 1;

            let game = match engine1_side {
                Side::Black => self.play_game(game_id, [(&mut *engine1, 1), (&mut *engine2, 2)]),
                Side::White => self.play_game(game_id, [(&mut *engine2, 2), (&mut *engine1, 1)]),
            };
            let game_result = result.record(&game, engine1_side);

            let outcome = match game_result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            if self.config.verbose {
                info!(
                    game = game_id,
                    of = self.config.num_games,
                    outcome,
                    engine1_side = %engine1_side,
                    black = game.black_disks,
                    white = game.white_disks,
                    "W-L-D {}-{}-{}, {}",
                    result.wins,
                    result.losses,
                    result.draws,
                    result.colour_summary()
                );
            }
        }

        result
    }

    /// Play one game. `players[0]` plays Black, `players[1]` plays White;
    /// each comes with the player id written to the game log.
    pub fn play_game(&mut self, game_id: u32, mut players: [(&mut dyn Engine, u32); 2]) -> GameRecord {
        let mut pos = self.config.start;
        let mut side = Side::Black;
        let mut moves = 0;
        let mut forfeit = None;

        for (engine, _) in players.iter_mut() {
            engine.new_game();
        }
        self.logger.game_started(game_id);

        while !pos.is_game_over() {
            if !pos.has_moves(side) {
                debug!(game = game_id, %side, "no legal move, passing");
                side = side.opponent();
                continue;
            }

            let (engine, player_id) = &mut players[side.idx()];
            let result = engine.search(&pos, side, self.config.search_limits());

            let played = result
                .best_move
                .filter(|&mv| pos.play(mv, side).is_ok());

            match played {
                Some(mv) => {
                    moves += 1;
                    debug!(
                        game = game_id,
                        ply = moves,
                        %side,
                        mv = %mv,
                        score = result.score,
                        depth = result.depth,
                        nodes = result.nodes,
                        elapsed_ms = result.elapsed.as_millis() as u64,
                        "move played"
                    );
                    self.logger.move_played(*player_id, side, mv, &pos);
                }
                None => {
                    warn!(
                        game = game_id,
                        %side,
                        engine = engine.name(),
                        mv = ?result.best_move,
                        "engine failed to produce a legal move, forfeiting"
                    );
                    forfeit = Some(side);
                    break;
                }
            }
            side = side.opponent();
        }

        let winner = match forfeit {
            Some(loser) => Some(loser.opponent()),
            None => pos.winner(),
        };
        self.logger.game_finished(&pos, winner);

        GameRecord {
            winner,
            forfeit,
            black_disks: pos.disk_count(Side::Black),
            white_disks: pos.disk_count(Side::White),
            moves,
            final_position: pos,
        }
    }
}

/// Quick utility to run a single match with default settings
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    time_per_move: Option<Duration>,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        time_per_move,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
