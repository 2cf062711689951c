//! # Pulsenet Core
//!
//! A discrete-event simulator for networks of pulse-driven logic modules.
//!
//! This library provides:
//! - A line-oriented wiring-list format for describing module networks
//! - A FIFO event-queue simulator driving button presses to quiescence
//! - Three module behaviors: broadcast, flip-flop, and conjunction
//! - Analysis modes: fixed-count pulse tallies and cycle-detection
//!   shortcutting for rare-target activation
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the wiring-list format
//! - [`network`] - Immutable network graph representation and validation
//! - [`modules`] - Module behavior models (broadcast, flip-flop, conjunction)
//! - [`sim`] - Event-queue simulator and the two analysis modes
//!
//! ## Usage
//!
//! ```no_run
//! use pulsenet_core::{dsl, Network, DEFAULT_PRESSES};
//! use pulsenet_core::network::validate_network;
//! use pulsenet_core::sim::{first_alignment, pulse_tally};
//!
//! # fn main() -> pulsenet_core::Result<()> {
//! let ast = dsl::parse("broadcaster -> a\n%a -> inv\n&inv -> rx\n")?;
//! let network = Network::from_ast(ast)?;
//! validate_network(&network)?;
//!
//! let tally = pulse_tally(network.clone(), DEFAULT_PRESSES)?;
//! let aligned = first_alignment(network, "rx")?;
//! # let _ = (tally, aligned);
//! # Ok(())
//! # }
//! ```
//!
//! ## Simulation Method
//!
//! One button press seeds a single low pulse from the button into the
//! broadcaster and drains the event queue strictly first-in-first-out:
//!
//! 1. Dequeue the oldest delivery and tally its value
//! 2. Invoke the receiver's behavior, if it has one
//! 3. Enqueue any emitted pulse once per outgoing edge, in edge order
//!
//! Node state persists across presses within one scenario; independent
//! scenarios are independent constructions and share nothing.

pub mod dsl;
pub mod error;
pub mod modules;
pub mod network;
pub mod sim;

// Re-export main types for convenience
pub use error::{PulsenetError, Result};
pub use network::{Network, Pulse};
pub use sim::Simulator;

/// Default press count for the fixed-count tally mode.
pub const DEFAULT_PRESSES: u64 = 1000;
