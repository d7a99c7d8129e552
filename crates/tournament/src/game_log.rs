//! Per-game logs: a readable move-by-move record and a terse result stream.
//!
//! Human sink:
//! ```text
//! Game id 3
//! PlayerId: 1 BLACK placed his piece on 3 4
//! - - - - - - - -
//! ...
//! Number of Black pieces: 40
//! Number of white pieces: 24.
//! Winner: Black
//! ```
//! System sink: `Game id 3` when the game starts and `B`, `W` or `T` when it ends.
//!
//! A failed write is reported and otherwise ignored: logging never stops a game.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use othello_core::{BoardSymbols, Move, Position, Side};
use tracing::warn;

use crate::error::TournamentError;

type Sink = Option<Box<dyn Write>>;

/// Writes game records to up to two append-only sinks.
pub struct GameLogger {
    human: Sink,
    system: Sink,
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::disabled()
    }
}

impl GameLogger {
    /// A logger that writes nowhere.
    pub fn disabled() -> Self {
        Self {
            human: None,
            system: None,
        }
    }

    pub fn new(human: impl Write + 'static, system: impl Write + 'static) -> Self {
        Self {
            human: Some(Box::new(human)),
            system: Some(Box::new(system)),
        }
    }

    /// Open both log files for appending, creating them if needed.
    pub fn open(human: &Path, system: &Path) -> Result<Self, TournamentError> {
        let open = |path: &Path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| TournamentError::io(path, e))
        };
        Ok(Self::new(open(human)?, open(system)?))
    }

    pub fn is_enabled(&self) -> bool {
        self.human.is_some() || self.system.is_some()
    }

    pub fn game_started(&mut self, game_id: u32) {
        let line = format!("Game id {game_id}\n");
        write_to(&mut self.human, "human", &line);
        write_to(&mut self.system, "system", &line);
    }

    /// Record `mv` by `side`; `pos` is the board after the move.
    pub fn move_played(&mut self, player_id: u32, side: Side, mv: Move, pos: &Position) {
        let text = format!(
            "PlayerId: {player_id} {side} placed his piece on {}\n{}",
            mv.to_human(),
            pos.to_text(BoardSymbols::default())
        );
        write_to(&mut self.human, "human", &text);
    }

    /// Record the final disk counts and the winner (`None` for a tie).
    pub fn game_finished(&mut self, pos: &Position, winner: Option<Side>) {
        let (name, code) = match winner {
            Some(Side::Black) => ("Black", 'B'),
            Some(Side::White) => ("White", 'W'),
            None => ("It's tie", 'T'),
        };
        let text = format!(
            "Number of Black pieces: {}\nNumber of white pieces: {}.\nWinner: {name}\n",
            pos.disk_count(Side::Black),
            pos.disk_count(Side::White)
        );
        write_to(&mut self.human, "human", &text);
        write_to(&mut self.system, "system", &format!("{code}\n"));
    }
}

fn write_to(sink: &mut Sink, name: &str, text: &str) {
    let Some(out) = sink else {
        return;
    };
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        warn!(sink = name, error = %e, "game log write failed");
    }
}

#[cfg(test)]
#[path = "game_log_tests.rs"]
mod game_log_tests;
