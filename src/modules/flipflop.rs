//! Flip-flop module behavior.

use crate::network::Pulse;

/// A module toggling an on/off state, initially off.
///
/// High pulses are ignored entirely: no state change, no output. A low
/// pulse flips the state and emits the new state as a pulse — high when
/// the flip-flop just turned on, low when it just turned off.
#[derive(Debug, Clone, Default)]
pub struct FlipFlop {
    on: bool,
}

impl FlipFlop {
    /// Create a flip-flop in the off state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a pulse, returning the emitted pulse if any.
    pub fn receive(&mut self, pulse: Pulse) -> Option<Pulse> {
        match pulse {
            Pulse::High => None,
            Pulse::Low => {
                self.on = !self.on;
                Some(if self.on { Pulse::High } else { Pulse::Low })
            }
        }
    }

    /// Current on/off state.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
