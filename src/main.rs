//! Pulsenet - Module Network Pulse Simulator
//!
//! A discrete-event simulator for pulse-driven logic module networks.
//!
//! # Usage
//!
//! ```bash
//! pulsenet network.txt                 # 1000-press pulse tally
//! pulsenet network.txt --target rx     # also predict first low into rx
//! ```

use std::path::PathBuf;

use clap::Parser;
use pulsenet_core::{
    dsl,
    error::Result,
    network::{validate_network, Network},
    sim::{first_alignment, pulse_tally},
    DEFAULT_PRESSES,
};

/// Module network pulse simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the wiring-list file
    #[arg(value_name = "NETWORK_FILE")]
    network_file: PathBuf,

    /// Number of button presses for the pulse tally
    #[arg(short, long, default_value_t = DEFAULT_PRESSES)]
    presses: u64,

    /// Predict the first press delivering a low pulse to this module
    #[arg(short, long)]
    target: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse the wiring list
    let ast = dsl::parse_file(&args.network_file)?;

    // Build and validate the network
    let network = Network::from_ast(ast)?;
    validate_network(&network)?;

    // Fixed-count tally over a fresh scenario
    let tally = pulse_tally(network.clone(), args.presses)?;
    println!("pulse tally over {} presses: {}", args.presses, tally);

    // Cycle-detection shortcut over another fresh scenario
    if let Some(target) = args.target {
        let press = first_alignment(network, &target)?;
        println!("first low pulse into '{}' at press: {}", target, press);
    }

    Ok(())
}
