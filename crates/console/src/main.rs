//! Play Othello against the minimax engine in the terminal.
//!
//! ```text
//! othello_console [--white] [--board FILE] [--time-ms T]
//! ```
//! Moves are typed as 1-based "row col" pairs, e.g. `3 4`.

mod game;
mod input;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use minimax_engine::MinimaxEngine;
use othello_core::{Position, SearchLimits, Side};
use tracing_subscriber::EnvFilter;

use crate::game::{ConsoleGame, GameOutcome};

struct Options {
    human: Side,
    board: Option<PathBuf>,
    limits: SearchLimits,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        human: Side::Black,
        board: None,
        limits: SearchLimits::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--white" | "-w" => options.human = Side::White,
            "--board" | "-b" => {
                let path = args.get(i + 1).context("--board needs a file")?;
                options.board = Some(path.into());
                i += 1;
            }
            "--time-ms" | "-t" => {
                let value = args.get(i + 1).context("--time-ms needs a value")?;
                let ms: u64 = value
                    .parse()
                    .with_context(|| format!("bad time '{value}'"))?;
                options.limits = match ms {
                    0 => SearchLimits::unlimited(),
                    ms => SearchLimits::time(Duration::from_millis(ms)),
                };
                i += 1;
            }
            other => bail!("unknown argument {other} (expected --white, --board FILE, --time-ms T)"),
        }
        i += 1;
    }
    Ok(options)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let start = match &options.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board from {}", path.display()))?;
            text.parse::<Position>()
                .with_context(|| format!("parsing board from {}", path.display()))?
        }
        None => Position::startpos(),
    };

    let mut game = ConsoleGame::new(MinimaxEngine::new(), options.human, options.limits);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = game.play(start, stdin.lock(), &mut stdout)?;
    stdout.flush()?;

    if outcome == GameOutcome::Abandoned {
        tracing::info!("game abandoned before the end");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options.human, Side::Black);
        assert!(options.board.is_none());
        assert_eq!(options.limits.move_time, Some(Duration::from_millis(5000)));
    }

    #[test]
    fn test_all_flags() {
        let options = parse_args(&args(&["--white", "--board", "start.txt", "--time-ms", "0"])).unwrap();
        assert_eq!(options.human, Side::White);
        assert_eq!(options.board, Some(PathBuf::from("start.txt")));
        assert_eq!(options.limits.move_time, None);
    }

    #[test]
    fn test_bad_flags() {
        assert!(parse_args(&args(&["--board"])).is_err());
        assert!(parse_args(&args(&["--time-ms", "soon"])).is_err());
        assert!(parse_args(&args(&["--depth", "3"])).is_err());
    }
}
