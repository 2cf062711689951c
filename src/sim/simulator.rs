//! Main simulator interface.

use std::collections::VecDeque;

use crate::error::Result;
use crate::modules::Module;
use crate::network::{ModuleId, Network, Pulse};

/// One in-flight pulse delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Sending module
    pub from: ModuleId,
    /// Receiving module
    pub to: ModuleId,
    /// Carried signal value
    pub pulse: Pulse,
}

/// Low/high delivery tallies for one or more presses.
///
/// Every dequeued delivery is counted, including deliveries to terminal
/// sinks that have no behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressCounts {
    pub low: u64,
    pub high: u64,
}

impl PressCounts {
    /// Accumulate another tally into this one.
    pub fn add(&mut self, other: PressCounts) {
        self.low += other.low;
        self.high += other.high;
    }

    /// The product of the two totals, the fixed-count tally answer.
    pub fn product(&self) -> u64 {
        self.low * self.high
    }
}

/// The main network simulator.
///
/// Owns one behavior instance per module (indexed by [`ModuleId`], `None`
/// for sinks) and the event queue. State persists and accumulates across
/// presses; resetting a scenario means constructing a fresh simulator from
/// a fresh network.
pub struct Simulator {
    /// The network being simulated
    network: Network,
    /// Behavior instance per module, indexed by ID
    modules: Vec<Option<Module>>,
    /// Pending deliveries, drained fully within each press
    queue: VecDeque<Delivery>,
}

impl Simulator {
    /// Create a new simulator for the given network.
    pub fn new(network: Network) -> Self {
        let modules = (0..network.len())
            .map(|idx| Module::for_node(&network, ModuleId(idx)))
            .collect();
        Self {
            network,
            modules,
            queue: VecDeque::new(),
        }
    }

    /// Execute one button press to quiescence.
    pub fn press(&mut self) -> Result<PressCounts> {
        self.press_observed(|_| {})
    }

    /// Execute one button press, invoking `observe` for every delivery in
    /// the order it is dequeued.
    ///
    /// The queue is seeded with a single low delivery from the button to
    /// the broadcaster, then drained strictly first-in-first-out. When a
    /// behavior emits a pulse, one delivery per outgoing edge is appended
    /// in the receiver's edge order. Quiescence is guaranteed for
    /// well-formed networks and is not guarded here; only the cross-press
    /// alignment loop carries a cap.
    pub fn press_observed<F>(&mut self, mut observe: F) -> Result<PressCounts>
    where
        F: FnMut(&Delivery),
    {
        let mut counts = PressCounts::default();

        self.queue.push_back(Delivery {
            from: ModuleId::BUTTON,
            to: self.network.broadcaster(),
            pulse: Pulse::Low,
        });

        while let Some(delivery) = self.queue.pop_front() {
            match delivery.pulse {
                Pulse::Low => counts.low += 1,
                Pulse::High => counts.high += 1,
            }
            observe(&delivery);

            // Sinks have no behavior: tally and drop
            let Some(module) = &mut self.modules[delivery.to.0] else {
                continue;
            };

            if let Some(out) = module.receive(delivery.pulse, delivery.from)? {
                for &dest in self.network.destinations(delivery.to) {
                    self.queue.push_back(Delivery {
                        from: delivery.to,
                        to: dest,
                        pulse: out,
                    });
                }
            }
        }

        Ok(counts)
    }

    /// Get a reference to the network.
    pub fn network(&self) -> &Network {
        &self.network
    }
}
