//! Headless experiment driver
//!
//! Runs one Buffon experiment to completion, standing in for the timer-driven
//! UI: each loop iteration is one scheduling tick. Prints the running-style
//! summary the reference UI shows, plus the classical pi estimate for needle
//! runs.
//!
//! Usage:
//!   buffon [--kind needle|circle] [--size F] [--trials N] [--seed N]
//!          [--config PATH]

use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use buffon::sim::ShapeKind;
use buffon::{SimConfig, TrialRunner};

fn parse_args(config: &mut SimConfig) -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{} requires a value", name))
        };
        match flag.as_str() {
            "--config" => {
                let path = value("--config")?;
                *config = SimConfig::load(Path::new(&path));
            }
            "--kind" => {
                let kind = value("--kind")?;
                config.shape_kind = ShapeKind::from_str(&kind)
                    .ok_or_else(|| format!("unknown shape kind `{}`", kind))?;
            }
            "--size" => {
                let size = value("--size")?;
                config.size = size
                    .parse()
                    .map_err(|_| format!("bad size `{}`", size))?;
            }
            "--trials" => {
                let trials = value("--trials")?;
                config.total_trials = trials
                    .parse()
                    .map_err(|_| format!("bad trial count `{}`", trials))?;
            }
            "--seed" => {
                let seed = value("--seed")?;
                config.seed =
                    Some(seed.parse().map_err(|_| format!("bad seed `{}`", seed))?);
            }
            other => return Err(format!("unknown argument `{}`", other)),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut config = SimConfig::default();
    if let Err(e) = parse_args(&mut config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    let seed = config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("experiment seeded with {}", seed);

    let mut runner = TrialRunner::new(seed);
    if let Err(e) = runner.start(config.shape_kind, config.size, config.total_trials) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    // Each iteration stands in for one timer tick
    while !runner.is_finished() {
        match runner.step() {
            Ok(Some(record)) => {
                log::debug!(
                    "{} #{}: {}",
                    record.kind().as_str(),
                    runner.plotted_count(),
                    if record.crossed { "cross" } else { "miss" }
                );
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Number of Plotted: {}", runner.plotted_count());
    println!(
        "Number of Crossing: {} ({:.2}%)",
        runner.crossing_count(),
        runner.crossing_rate() * 100.0
    );

    // Buffon's law: P(cross) = 2L / (pi * d) for a needle no longer than the
    // line spacing, so pi can be estimated from the observed rate.
    let spacing = runner.field().line_spacing();
    if config.shape_kind == ShapeKind::Needle
        && config.size <= spacing
        && runner.crossing_count() > 0
    {
        let pi_estimate =
            2.0 * config.size * runner.plotted_count() as f64
                / (spacing * runner.crossing_count() as f64);
        println!("Pi estimate: {:.4}", pi_estimate);
    }

    ExitCode::SUCCESS
}
