//! Event-queue simulation engine.
//!
//! This module provides the discrete-event core of the crate.
//!
//! ## Press semantics
//!
//! One button press seeds a single low delivery from the button to the
//! broadcaster and then drains a first-in-first-out queue to quiescence.
//! FIFO order is load-bearing: a conjunction must observe the updates from
//! all of its current-generation senders before any module two hops
//! downstream reacts to the cumulative result, which breadth-first
//! processing guarantees and depth-first would not.
//!
//! ## Analysis modes
//!
//! [`pulse_tally`] runs a fixed number of presses and multiplies the total
//! low and high delivery counts. [`first_alignment`] shortcuts rare-target
//! activation by recording when each feeder of the target's penultimate
//! module first emits high, and combining the press numbers with a least
//! common multiple instead of simulating billions of presses directly.

mod analyze;
mod simulator;

pub use analyze::{first_alignment, pulse_tally};
pub use simulator::{Delivery, PressCounts, Simulator};

/// Safety cap for the alignment loop.
///
/// The loop is bounded in practice (feeder periods are small), but a
/// topology violating the periodicity assumption would otherwise hang; the
/// cap surfaces that as a diagnostic instead.
pub const MAX_ALIGNMENT_PRESSES: u64 = 1 << 24;
