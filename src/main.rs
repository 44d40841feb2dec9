//! Snowdrift headless runner
//!
//! Drives the simulation with a manual clock (one frame every 16 ms),
//! optionally printing ASCII frames, and reports run statistics as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use snowdrift::Settings;
use snowdrift::platform::{ManualClock, SeededRandom, TickInput};
use snowdrift::render::{AsciiSurface, LogoArt, render};
use snowdrift::sim::{SimState, TickOutcome, tick};

/// Simulated frame length
const FRAME_MS: u64 = 16;

/// Command-line arguments for a headless run.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// JSON settings file; missing fields use their defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of frames to simulate, including the start-up delay.
    #[arg(short, long, default_value_t = 2000)]
    ticks: u64,
    /// Random seed (overrides the settings file).
    #[arg(short, long)]
    seed: Option<u64>,
    /// Start rotating the logo as soon as the run is active.
    #[arg(long)]
    rotate: bool,
    /// Print an ASCII frame every N ticks (0 prints only the last frame).
    #[arg(long, value_name = "N", default_value_t = 0)]
    frame_every: u64,
    /// Screen pixels per ASCII cell.
    #[arg(long, value_name = "PIXELS", default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..=16))]
    scale: u32,
}

fn load_settings(args: &CliArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Settings::from_json(&json).with_context(|| format!("loading {}", path.display()))?
        }
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let settings = load_settings(&args)?;
    log::info!(
        "Snowdrift starting: {}x{}, seed {}",
        settings.screen_width,
        settings.screen_height,
        settings.seed
    );

    let clock = ManualClock::new(0);
    let mut rng = SeededRandom::new(settings.seed);
    let mut surface = AsciiSurface::new(settings.screen_width, settings.screen_height, args.scale);
    let mut state = SimState::try_new(settings, 0)?;
    let art = LogoArt::new(&state.logo);

    for n in 1..=args.ticks {
        clock.advance(FRAME_MS);
        let input = TickInput {
            toggle_rotation: args.rotate && state.tick_count == 1 && !state.rotating,
            ..Default::default()
        };
        if tick(&mut state, &input, &clock, &mut rng) == TickOutcome::Exit {
            break;
        }
        render(&state, &art, &mut surface);
        if args.frame_every > 0 && n % args.frame_every == 0 {
            println!("--- tick {n} ---\n{surface}");
        }
    }

    if args.frame_every == 0 {
        println!("{surface}");
    }
    println!("{}", serde_json::to_string_pretty(&state.stats)?);
    log::info!(
        "Finished after {} active ticks: {} flakes falling, {} on the logo",
        state.tick_count,
        state.snow.active_count(),
        state.pile.active_count()
    );
    Ok(())
}
