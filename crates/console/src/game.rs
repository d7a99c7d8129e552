//! Human vs engine game loop over any line-based input and text output.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use othello_core::{Engine, Move, Position, SearchLimits, Side};
use tracing::debug;

use crate::input::{list_moves, parse_legal_move};

/// How a console game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Neither side can move. `winner` is `None` on a tie.
    Finished {
        winner: Option<Side>,
        position: Position,
    },
    /// The human's input ended before the game did.
    Abandoned,
}

pub struct ConsoleGame<E: Engine> {
    engine: E,
    human: Side,
    limits: SearchLimits,
}

impl<E: Engine> ConsoleGame<E> {
    pub fn new(engine: E, human: Side, limits: SearchLimits) -> Self {
        Self {
            engine,
            human,
            limits,
        }
    }

    /// Play from `start` with Black to move until the game ends or `input` runs dry.
    pub fn play<R: BufRead, W: Write>(&mut self, start: Position, input: R, out: &mut W) -> Result<GameOutcome> {
        let mut pos = start;
        let mut side = Side::Black;
        let mut lines = input.lines();

        self.engine.new_game();
        writeln!(out, "You play {}.", self.human)?;
        write!(out, "{pos}")?;

        while !pos.is_game_over() {
            if !pos.has_moves(side) {
                writeln!(out, "{side} has no legal move and passes.")?;
                side = side.opponent();
                continue;
            }

            let mv = if side == self.human {
                match ask_move(&pos, side, &mut lines, out)? {
                    Some(mv) => mv,
                    None => {
                        writeln!(out, "Input closed, leaving the game.")?;
                        return Ok(GameOutcome::Abandoned);
                    }
                }
            } else {
                let result = self.engine.search(&pos, side, self.limits.clone());
                debug!(
                    %side,
                    score = result.score,
                    depth = result.depth,
                    nodes = result.nodes,
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "engine move"
                );
                result
                    .best_move
                    .with_context(|| format!("{} returned no move for {side}", self.engine.name()))?
            };

            pos.play(mv, side)?;
            writeln!(out, "{side} placed a piece on {}", mv.to_human())?;
            write!(out, "{pos}")?;
            side = side.opponent();
        }

        let winner = pos.winner();
        writeln!(out, "Number of Black pieces: {}", pos.disk_count(Side::Black))?;
        writeln!(out, "Number of white pieces: {}.", pos.disk_count(Side::White))?;
        match winner {
            Some(side) if side == self.human => writeln!(out, "Winner: {side} (you)")?,
            Some(side) => writeln!(out, "Winner: {side}")?,
            None => writeln!(out, "It's a tie")?,
        }

        Ok(GameOutcome::Finished {
            winner,
            position: pos,
        })
    }
}

/// Prompt until a legal move is typed. `None` once the input is exhausted.
fn ask_move<I, W>(pos: &Position, side: Side, lines: &mut I, out: &mut W) -> Result<Option<Move>>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    loop {
        writeln!(out, "Available moves: {}", list_moves(pos, side))?;
        write!(out, "{side}, enter row and column: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match parse_legal_move(pos, side, &line?) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => writeln!(out, "{e}. Try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::MinimaxEngine;
    use std::io::Cursor;

    fn board(text: &str) -> Position {
        text.parse().unwrap()
    }

    fn run(start: Position, human: Side, input: &str) -> (GameOutcome, String) {
        let mut game = ConsoleGame::new(MinimaxEngine::new(), human, SearchLimits::unlimited());
        let mut out = Vec::new();
        let outcome = game.play(start, Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_bad_input_is_rejected_until_legal() {
        // Black's only move is 1 3; it ends the game.
        let start = board(
            "\
            B W - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -",
        );

        let (outcome, out) = run(start, Side::Black, "hello\n9 9\n1 1\n1 3\n");

        assert_eq!(out.matches("Try again.").count(), 3);
        assert!(out.contains("Available moves: (1 3)"));
        assert!(out.contains("BLACK placed a piece on 1 3"));
        assert!(out.ends_with("Winner: BLACK (you)\n"));
        match outcome {
            GameOutcome::Finished { winner, position } => {
                assert_eq!(winner, Some(Side::Black));
                assert_eq!(position.disk_count(Side::Black), 3);
            }
            GameOutcome::Abandoned => panic!("game should have finished"),
        }
    }

    #[test]
    fn test_human_pass_and_engine_reply() {
        // Black cannot move; White's only move is 1 3.
        let start = board(
            "\
            W B - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -",
        );

        let (outcome, out) = run(start, Side::Black, "");

        assert!(out.contains("BLACK has no legal move and passes."));
        assert!(out.contains("WHITE placed a piece on 1 3"));
        assert_eq!(
            outcome,
            GameOutcome::Finished {
                winner: Some(Side::White),
                position: board(
                    "\
                    W W W - - - - -
                    - - - - - - - -
                    - - - - - - - -
                    - - - - - - - -
                    - - - - - - - -
                    - - - - - - - -
                    - - - - - - - -
                    - - - - - - - -"
                ),
            }
        );
    }

    #[test]
    fn test_closed_input_abandons() {
        let (outcome, out) = run(Position::startpos(), Side::Black, "3 4\n");
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert!(out.contains("BLACK placed a piece on 3 4"));
        assert!(out.contains("WHITE placed a piece on"));
        assert!(out.ends_with("Input closed, leaving the game.\n"));
    }

    #[test]
    fn test_human_as_white_waits_for_engine() {
        let (outcome, out) = run(Position::startpos(), Side::White, "");
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert!(out.starts_with("You play WHITE."));
        assert!(out.contains("BLACK placed a piece on"));
    }
}
