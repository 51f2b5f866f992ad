//! # Park Simulation Bootstrap Binary
//!
//! Loads `park.toml`, resets the ride tables, places the configured rides
//! and reports the ride count.
//!
//! # Usage
//!
//! ```bash
//! # Default config path
//! park_sim
//!
//! # Explicit config, verbose logging
//! park_sim --config park.toml -v
//!
//! # JSON logs
//! park_sim --config park.toml --json
//! ```

#![deny(warnings)]

use clap::Parser;
use park::config::LogLevel;
use park::consts::DEFAULT_CONFIG_PATH;
use park_sim::core::ParkCore;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Park simulation bootstrap - resets and seeds the ride tables
#[derive(Parser, Debug)]
#[command(name = "park_sim")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Resets and seeds the ride tables of a park simulation")]
#[command(long_about = None)]
struct Args {
    /// Path to park configuration file (park.toml).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose logging (overrides the configured log level)
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("Park startup failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config decides the log level, so a load failure is logged at the default.
    let config = match ParkCore::load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            setup_tracing(&args, LogLevel::default());
            return Err(e.into());
        }
    };
    setup_tracing(&args, config.shared.log_level);

    info!("Park sim v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("Loaded config from {:?}", args.config);

    let mut core = ParkCore::new(config)?;
    core.start()?;

    for (index, ride) in core.rides().iter() {
        info!(%index, ride_type = %ride.ride_type, "Ride present");
    }
    info!(
        service = %core.config().shared.service_name,
        rides = core.ride_count(),
        capacity = core.rides().capacity(),
        "Park sim ready"
    );
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and configured level.
fn setup_tracing(args: &Args, level: LogLevel) {
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        level
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
