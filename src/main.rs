//! Gap Runner entry point
//!
//! Headless native driver: runs the autopilot against the simulation at a
//! fixed 60 Hz clock, restarting after each game over, and logs what happens.

use std::time::{SystemTime, UNIX_EPOCH};

use gap_runner::audio::{LogAudio, SoundEffect};
use gap_runner::sim::{GameEvent, GameState};
use gap_runner::tuning::GapStrategy;
use gap_runner::{Session, SimError, Tuning};

const FRAME_RATE: f64 = 60.0;

/// Command line options
struct Options {
    seed: u64,
    width: f32,
    height: f32,
    frames: u64,
    runs: u32,
    tuning: Option<String>,
    strategy: Option<GapStrategy>,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            seed,
            width: 480.0,
            height: 800.0,
            frames: 60 * 120,
            runs: 3,
            tuning: None,
            strategy: None,
            json: false,
        }
    }
}

const USAGE: &str = "usage: gap-runner [--seed N] [--size WxH] [--frames N] [--runs N] \
                     [--tuning FILE] [--gaps sequential|hashed] [--json]";

fn parse_args() -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--seed" => options.seed = parse(&value("--seed")?)?,
            "--frames" => options.frames = parse(&value("--frames")?)?,
            "--runs" => options.runs = parse(&value("--runs")?)?,
            "--tuning" => options.tuning = Some(value("--tuning")?),
            "--size" => {
                let size = value("--size")?;
                let (w, h) = size
                    .split_once('x')
                    .ok_or_else(|| format!("bad size {size:?}, expected WxH"))?;
                options.width = parse(w)?;
                options.height = parse(h)?;
            }
            "--gaps" => {
                let name = value("--gaps")?;
                let strategy = GapStrategy::from_str(&name)
                    .ok_or_else(|| format!("unknown gap strategy {name:?}"))?;
                options.strategy = Some(strategy);
            }
            "--json" => options.json = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument {other:?}\n{USAGE}")),
        }
    }
    Ok(options)
}

fn parse<T: std::str::FromStr>(s: &str) -> Result<T, String> {
    s.parse().map_err(|_| format!("invalid number {s:?}"))
}

fn main() -> Result<(), SimError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let mut tuning = match &options.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    if let Some(strategy) = options.strategy {
        tuning.gap_strategy = strategy;
    }

    log::info!("Gap Runner (headless) starting...");
    log::info!(
        "Seed {}, screen {}x{}, gaps {}",
        options.seed,
        options.width,
        options.height,
        tuning.gap_strategy.as_str()
    );

    let state = GameState::new(options.seed, options.width, options.height, tuning)?;
    let mut session = Session::new(state, LogAudio::new());
    session.set_autopilot(true);

    let mut scores = Vec::new();
    for frame in 0..options.frames {
        let now = frame as f64 / FRAME_RATE;
        for event in session.frame(now) {
            if let GameEvent::Scored { score } = event {
                log::debug!("Score {}", score);
            }
        }

        if let Some(score) = session.take_game_over() {
            println!("Game over! Your score was: {score}");
            scores.push(score);
            if scores.len() as u32 >= options.runs {
                break;
            }
            session.restart();
        }
    }

    println!(
        "Runs: {}, scores: {:?}, best: {}, flaps: {}",
        scores.len(),
        scores,
        session.state.best_score,
        session.audio().count(SoundEffect::Flap)
    );

    if options.json {
        let snapshot = session.snapshot();
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::warn!("Snapshot serialization failed: {}", e),
        }
    }

    Ok(())
}
