//! Mini golf headless runner
//!
//! Loads a level, fires one shot and prints what happened as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glam::DVec2;
use serde::Serialize;

use minigolf::level::{LevelModel, ParseWarning, parse_level};
use minigolf::sim::{GameEvent, GamePhase, Round, run_until_settled};
use minigolf::{LevelCatalog, Settings, direction_from_degrees};

#[derive(Parser)]
#[command(name = "minigolf")]
#[command(version, about = "Mini golf physics runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in levels.
    List,

    /// Parse a level and print its geometry.
    Inspect {
        #[command(flatten)]
        source: LevelSource,
    },

    /// Fire one shot and simulate until the ball stops or drops.
    Simulate {
        #[command(flatten)]
        source: LevelSource,

        /// Shot direction in degrees (0 = right, 90 = down).
        #[arg(short, long)]
        angle: f64,

        /// Drag length in game units (capped by max_aim_length).
        #[arg(short, long, default_value_t = 100.0)]
        power: f64,

        /// Settings JSON file.
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Give up after this many ticks.
        #[arg(long, default_value_t = 10_000)]
        max_ticks: u32,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct LevelSource {
    /// Built-in level number (1-based).
    #[arg(short, long)]
    level: Option<usize>,

    /// Level text file.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

struct LoadedLevel {
    index: usize,
    par: u32,
    model: LevelModel,
    warnings: Vec<ParseWarning>,
}

impl LevelSource {
    fn load(&self) -> Result<LoadedLevel> {
        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading level file {}", path.display()))?;
            let parsed = parse_level(&text);
            return Ok(LoadedLevel {
                index: 0,
                par: 3,
                model: parsed.model,
                warnings: parsed.warnings,
            });
        }

        let number = self.level.unwrap_or(1);
        let index = number.checked_sub(1).context("level numbers start at 1")?;
        let catalog = LevelCatalog::builtin().context("loading built-in levels")?;
        let par = catalog.get(index)?.par;
        let parsed = catalog.parse(index)?;
        Ok(LoadedLevel {
            index,
            par,
            model: parsed.model,
            warnings: parsed.warnings,
        })
    }
}

#[derive(Serialize)]
struct LevelSummary<'a> {
    number: usize,
    par: u32,
    theme: &'a str,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    level: &'a LevelModel,
    wall_count: usize,
    warnings: &'a [ParseWarning],
}

#[derive(Serialize)]
struct SimulateReport {
    level: usize,
    par: u32,
    ticks: u32,
    phase: GamePhase,
    holed: bool,
    wall_hits: usize,
    final_position: DVec2,
    events: Vec<GameEvent>,
}

fn list() -> Result<()> {
    let catalog = LevelCatalog::builtin()?;
    let levels: Vec<LevelSummary> = catalog
        .iter()
        .enumerate()
        .map(|(i, data)| LevelSummary {
            number: i + 1,
            par: data.par,
            theme: &data.theme,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&levels)?);
    Ok(())
}

fn inspect(source: &LevelSource) -> Result<()> {
    let loaded = source.load()?;
    let report = InspectReport {
        level: &loaded.model,
        wall_count: loaded.model.wall_count(),
        warnings: &loaded.warnings,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn simulate(
    source: &LevelSource,
    angle: f64,
    power: f64,
    settings: Option<&PathBuf>,
    max_ticks: u32,
) -> Result<()> {
    let settings = match settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings {}", path.display()))?,
        None => Settings::default(),
    };
    let loaded = source.load()?;

    let mut round = Round::new(loaded.index, loaded.model, loaded.par);
    let target = round.ball.pos + direction_from_degrees(angle) * power;
    round.shoot(target, &settings);
    let ticks = run_until_settled(&mut round, &settings, max_ticks);
    if round.phase == GamePhase::Rolling {
        log::warn!("Ball still rolling after {} ticks", ticks);
    }

    let events = round.drain_events();
    let report = SimulateReport {
        level: loaded.index + 1,
        par: loaded.par,
        ticks,
        phase: round.phase,
        holed: round.is_holed(),
        wall_hits: events
            .iter()
            .filter(|e| matches!(e, GameEvent::WallHit { .. }))
            .count(),
        final_position: round.ball.pos,
        events,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => list(),
        Commands::Inspect { source } => inspect(&source),
        Commands::Simulate {
            source,
            angle,
            power,
            settings,
            max_ticks,
        } => simulate(&source, angle, power, settings.as_ref(), max_ticks),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
