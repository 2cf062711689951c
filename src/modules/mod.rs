//! Behavior models for network modules.
//!
//! This module provides the three module behaviors:
//! - Broadcast: stateless pass-through (the entry module)
//! - Flip-flop: on/off toggle driven by low pulses
//! - Conjunction: NAND over remembered inbound pulses
//!
//! The behavior set is closed, so [`Module`] is a sum type with a single
//! `receive` dispatch rather than a trait object. Sinks have no behavior
//! instance at all; the simulator tallies their deliveries and drops them.

mod conjunction;
mod flipflop;

pub use conjunction::Conjunction;
pub use flipflop::FlipFlop;

use crate::error::Result;
use crate::network::{ModuleId, ModuleKind, Network, Pulse};

/// A module behavior instance.
#[derive(Debug, Clone)]
pub enum Module {
    Broadcast,
    FlipFlop(FlipFlop),
    Conjunction(Conjunction),
}

impl Module {
    /// Create the behavior instance for a node of the given network.
    ///
    /// Returns `None` for sinks (and the button), which receive and discard.
    /// Conjunction memories are sized from the network's reverse lookup.
    pub fn for_node(network: &Network, id: ModuleId) -> Option<Self> {
        match network.kind(id) {
            ModuleKind::Broadcast => Some(Module::Broadcast),
            ModuleKind::FlipFlop => Some(Module::FlipFlop(FlipFlop::new())),
            ModuleKind::Conjunction => {
                Some(Module::Conjunction(Conjunction::new(network.inputs(id))))
            }
            ModuleKind::Sink => None,
        }
    }

    /// Deliver a pulse from `from`, returning the emitted pulse if any.
    pub fn receive(&mut self, pulse: Pulse, from: ModuleId) -> Result<Option<Pulse>> {
        match self {
            Module::Broadcast => Ok(Some(pulse)),
            Module::FlipFlop(ff) => Ok(ff.receive(pulse)),
            Module::Conjunction(con) => con.receive(pulse, from).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl;

    #[test]
    fn test_broadcast_forwards_unchanged() {
        let mut m = Module::Broadcast;
        assert_eq!(m.receive(Pulse::Low, ModuleId::BUTTON).unwrap(), Some(Pulse::Low));
        assert_eq!(m.receive(Pulse::High, ModuleId::BUTTON).unwrap(), Some(Pulse::High));
    }

    #[test]
    fn test_for_node_matches_kind() {
        let ast = dsl::parse("broadcaster -> a\n%a -> inv\n&inv -> out\n").unwrap();
        let net = Network::from_ast(ast).unwrap();

        assert!(matches!(
            Module::for_node(&net, net.broadcaster()),
            Some(Module::Broadcast)
        ));
        assert!(matches!(
            Module::for_node(&net, net.find_module("a").unwrap()),
            Some(Module::FlipFlop(_))
        ));
        let inv = net.find_module("inv").unwrap();
        match Module::for_node(&net, inv) {
            Some(Module::Conjunction(con)) => assert_eq!(con.input_count(), 1),
            other => panic!("expected conjunction, got {other:?}"),
        }
        assert!(Module::for_node(&net, net.find_module("out").unwrap()).is_none());
        assert!(Module::for_node(&net, ModuleId::BUTTON).is_none());
    }
}
