//! Paddle Pilot entry point
//!
//! Reads snapshots from stdin, writes instructions to stdout, logs to stderr.

use std::io;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use paddle_pilot::sim::Session;
use paddle_pilot::{JsonLinesChannel, Settings};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Paddle Pilot starting...");

    let settings = Settings::from_env();
    let rng = match settings.seed {
        Some(seed) => {
            log::info!("Serving with fixed seed {}", seed);
            Pcg32::seed_from_u64(seed)
        }
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut channel = JsonLinesChannel::new(stdin.lock(), stdout.lock());

    let mut session = Session::from_settings(rng, &settings);
    let summary = session
        .run(&mut channel)
        .context("frame channel failed")?;

    log::info!(
        "Session summary: {}",
        serde_json::to_string(&summary).context("encoding session summary")?
    );
    Ok(())
}
