//! handsign-replay — run recorded landmark frames through the engine.
//!
//! Reads one JSON object per line (`{"timestamp_ms": 0, "handedness":
//! "right", "landmarks": [{"x":..,"y":..,"z":..}, ...]}`; omit
//! `landmarks` for a no-hand frame) and prints stable gesture
//! transitions and motion events.  Useful for tuning thresholds against
//! captured sessions without a camera.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::warn;

use handsign::{GestureConfig, GestureEngine, Hand, Handedness, Landmark};

#[derive(Parser, Debug)]
#[command(name = "handsign-replay", about = "Replay landmark frames through the gesture engine")]
struct Cli {
    /// JSONL file of recorded frames.
    input: PathBuf,

    /// Optional JSON config file (missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the stabilization window from the config.
    #[arg(long)]
    window: Option<usize>,

    /// Print the raw label for every frame, not just transitions.
    #[arg(long)]
    raw: bool,
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    timestamp_ms: f64,
    #[serde(default)]
    landmarks: Option<Vec<Landmark>>,
    #[serde(default)]
    handedness: Option<Handedness>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handsign=info".into()),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {:?}", path))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse config {:?}", path))?
        }
        None => GestureConfig::default(),
    };
    if let Some(window) = cli.window {
        config.stabilization_window = window;
    }

    let mut engine = GestureEngine::new(config).context("invalid configuration")?;

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {:?}", cli.input))?;
    let reader = BufReader::new(file);

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        let record: FrameRecord = serde_json::from_str(&line)
            .with_context(|| format!("bad frame record on line {}", line_no + 1))?;

        // Malformed landmark sets are a per-frame condition, not a fatal
        // one: log and treat the frame as no-hand.
        let hand = match &record.landmarks {
            Some(landmarks) => match Hand::from_slice(landmarks) {
                Ok(hand) => Some(hand),
                Err(err) => {
                    warn!("line {}: {} — treating as no-hand", line_no + 1, err);
                    None
                }
            },
            None => None,
        };
        let handedness = record.handedness.unwrap_or(Handedness::Right);

        let out = engine.process(
            hand.as_ref().map(|h| (h, handedness)),
            record.timestamp_ms,
        );

        if cli.raw {
            println!("{:10.1}  raw    {}", out.timestamp_ms, out.raw);
        }
        if let Some(motion) = out.motion {
            println!("{:10.1}  motion {}", out.timestamp_ms, motion);
        }
        if let Some(change) = out.change {
            println!(
                "{:10.1}  stable {} (was {})",
                out.timestamp_ms, change.label, change.previous
            );
        }
    }

    println!("final stable label: {}", engine.stable());
    Ok(())
}
