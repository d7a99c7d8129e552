//! Tournament CLI
//!
//! Run series of games between Othello engines and report the results.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tournament::{create_engine, MatchRunner, SeriesConfig, TournamentConfig, TournamentResults};

fn print_usage() {
    println!("Othello Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match [engine1] [engine2] [--games N] [--time-ms T] [--alternate]");
    println!("                   [--config FILE] [--out FILE]");
    println!("                   [--log-human FILE --log-system FILE]");
    println!("  tournament report <results.json>");
    println!();
    println!("Engine 1 plays Black (player 1) unless sides alternate.");
    println!("Defaults: minimax vs random, 100 games, 5000 ms per move, fixed sides.");
    println!("--time-ms 0 removes the per-move limit.");
    println!();
    println!("Engines:");
    println!("  minimax        - Depth and time bounded minimax with corner evaluation");
    println!("  random         - Uniform random legal moves");
    println!("  random:SEED    - Reproducible random moves");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 20 --time-ms 500");
    println!("  tournament match --config series.toml --out results.json");
}

/// Value following a flag.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn run_match(args: &[String]) -> Result<()> {
    let mut engines: Vec<&str> = Vec::new();
    let mut games: Option<u32> = None;
    let mut time_ms: Option<u64> = None;
    let mut alternate = false;
    let mut config_path: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut log_human: Option<PathBuf> = None;
    let mut log_system: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                let value = flag_value(args, i, "--games")?;
                games = Some(value.parse().with_context(|| format!("bad game count '{value}'"))?);
                i += 1;
            }
            "--time-ms" | "-t" => {
                let value = flag_value(args, i, "--time-ms")?;
                time_ms = Some(value.parse().with_context(|| format!("bad time '{value}'"))?);
                i += 1;
            }
            "--alternate" => alternate = true,
            "--config" | "-c" => {
                config_path = Some(flag_value(args, i, "--config")?.into());
                i += 1;
            }
            "--out" | "-o" => {
                out = Some(flag_value(args, i, "--out")?.into());
                i += 1;
            }
            "--log-human" => {
                log_human = Some(flag_value(args, i, "--log-human")?.into());
                i += 1;
            }
            "--log-system" => {
                log_system = Some(flag_value(args, i, "--log-system")?.into());
                i += 1;
            }
            flag if flag.starts_with('-') => bail!("unknown option {flag}"),
            engine => engines.push(engine),
        }
        i += 1;
    }

    let mut series = match &config_path {
        Some(path) => SeriesConfig::load(path)?,
        None => SeriesConfig::default(),
    };
    if let Some(games) = games {
        series.series.games = games;
    }
    if let Some(ms) = time_ms {
        series.series.time_per_move_ms = ms;
    }
    if alternate {
        series.series.alternate_sides = true;
    }
    if log_human.is_some() || log_system.is_some() {
        series.log.human = log_human;
        series.log.system = log_system;
        if series.log.human.is_none() || series.log.system.is_none() {
            bail!("--log-human and --log-system must be given together");
        }
    }

    let (engine1_spec, engine2_spec) = match engines.as_slice() {
        [] => ("minimax", "random"),
        [e1, e2] => (*e1, *e2),
        _ => bail!("match takes zero or two engine names"),
    };

    let mut engine1 = create_engine(engine1_spec, &series.search)?;
    let mut engine2 = create_engine(engine2_spec, &series.search)?;
    let logger = series.game_logger()?;
    let config = series.match_config(true);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Time: {}, Sides: {}",
        config.num_games,
        describe_time(config.time_per_move),
        if config.alternate_sides { "alternating" } else { "fixed" }
    );
    println!();

    let mut runner = MatchRunner::with_logger(config, logger);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("{}", result.colour_summary());
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = out {
        let mut results = TournamentResults::new(
            &format!("{engine1_spec} vs {engine2_spec}"),
            vec![engine1_spec.to_string(), engine2_spec.to_string()],
            TournamentConfig::from(runner.config()),
        );
        results.add_match(engine1_spec, engine2_spec, result);
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}

fn describe_time(time: Option<Duration>) -> String {
    match time {
        Some(t) => format!("{} ms/move", t.as_millis()),
        None => "unlimited".to_string(),
    }
}

fn show_report(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("report needs a results file");
    };
    let results = TournamentResults::load(Path::new(path))?;
    results.print_report();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "report" => show_report(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
