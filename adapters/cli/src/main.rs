#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless Outbreak Defence runner.
//!
//! Builds a small defence out of the starting gold, then requests waves one
//! after another and prints a summary line as each wave clears. Exits when
//! the requested number of waves has completed or the base falls.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;

use outbreak_defence_cli::Session;
use outbreak_defence_core::{
    geometry, BuildError, Command, Event, GameConfig, Position, TowerKind,
};
use outbreak_defence_world::query;

/// Command-line arguments for the headless runner.
#[derive(Debug, Parser)]
#[command(name = "outbreak-defence", version, about = "Headless Outbreak Defence simulation")]
struct Args {
    /// TOML session configuration; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Number of waves to survive before exiting.
    #[arg(long, default_value_t = 5)]
    waves: u32,

    /// Overrides the wave seed from the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation speed multiplier applied to every frame.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Fixed simulation rate in frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.fps > 0, "fps must be positive");
    anyhow::ensure!(args.speed > 0.0, "speed must be positive");

    let mut config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.wave_seed = seed;
    }

    let mut session = Session::new(config)?;
    session.set_speed(args.speed);

    let built = build_initial_defence(&mut session);
    println!(
        "defence ready: {built} tower(s), gold {}, lives {}",
        query::gold(session.world()),
        query::lives(session.world()),
    );

    let dt = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let started = Instant::now();
    let mut completed = 0u32;
    let mut kills = 0u32;
    let mut leaks = 0u32;

    session.queue(Command::RequestWave);
    'run: while completed < args.waves {
        let events = session.frame(dt);
        for event in &events {
            match event {
                Event::ZombieKilled { .. } => kills += 1,
                Event::ZombieReachedEnd { .. } => leaks += 1,
                Event::WaveCompleted { wave, bonus } => {
                    println!(
                        "wave {wave} complete: {kills} killed, {leaks} leaked, bonus {bonus}, \
                         gold {}, lives {}, score {}",
                        query::gold(session.world()),
                        query::lives(session.world()),
                        query::score(session.world()),
                    );
                    kills = 0;
                    leaks = 0;
                    completed += 1;
                    if completed < args.waves {
                        session.queue(Command::RequestWave);
                    }
                }
                Event::GameOver { score, wave } => {
                    println!("game over on wave {wave} with score {score}");
                    break 'run;
                }
                _ => {}
            }
        }
    }

    println!(
        "finished after {completed} wave(s) in {:.2}s: score {}, gold {}, lives {}",
        started.elapsed().as_secs_f64(),
        query::score(session.world()),
        query::gold(session.world()),
        query::lives(session.world()),
    );
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration from {}", path.display()))?;
    let config: GameConfig = toml::from_str(&text)
        .with_context(|| format!("parsing configuration from {}", path.display()))?;
    Ok(config)
}

/// Spends starting gold on towers placed in the cells closest to the path.
///
/// Build rejections are expected while probing: path cells report occupied
/// and the loadout deliberately overshoots the budget so the last attempt
/// ends on insufficient gold.
fn build_initial_defence(session: &mut Session) -> usize {
    let world = session.world();
    let columns = query::grid_columns(world);
    let rows = query::grid_rows(world);
    let tile = query::tile_size(world);
    let path = query::path(world).to_vec();

    let mut spots = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            let center = Position::new(
                (column as f32 + 0.5) * tile,
                (row as f32 + 0.5) * tile,
            );
            spots.push(center);
        }
    }
    spots.sort_by(|a, b| path_distance(*a, &path).total_cmp(&path_distance(*b, &path)));

    let loadout = [
        TowerKind::Basic,
        TowerKind::Basic,
        TowerKind::Sniper,
        TowerKind::Basic,
    ];
    let mut built = 0usize;
    for spot in spots {
        if built == loadout.len() {
            break;
        }
        session.queue(Command::BuildTower {
            kind: loadout[built],
            at: spot,
        });
        let events = session.frame(Duration::ZERO);
        if events
            .iter()
            .any(|event| matches!(event, Event::TowerBuilt { .. }))
        {
            built += 1;
        } else if events.iter().any(|event| {
            matches!(
                event,
                Event::BuildRejected {
                    reason: BuildError::InsufficientGold,
                    ..
                }
            )
        }) {
            break;
        }
    }
    built
}

fn path_distance(spot: Position, path: &[Position]) -> f32 {
    path.iter()
        .map(|point| geometry::distance(spot, *point))
        .fold(f32::INFINITY, f32::min)
}
