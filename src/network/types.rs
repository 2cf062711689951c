//! Core types for network representation.

use std::fmt;

/// A unique identifier for a module in the network.
/// Module 0 is always the external button actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub usize);

impl ModuleId {
    /// The external button actuator (always index 0).
    pub const BUTTON: ModuleId = ModuleId(0);

    /// Check if this is the button actuator.
    pub fn is_button(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_button() {
            write!(f, "BUTTON")
        } else {
            write!(f, "M{}", self.0)
        }
    }
}

/// A binary signal carried along one edge from one module to one destination.
///
/// Pulses are transient messages: they exist only as in-flight queue entries
/// inside the simulator, never as stored values outside conjunction memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pulse {
    Low,
    High,
}

impl Pulse {
    /// Check if this is a high pulse.
    pub fn is_high(&self) -> bool {
        matches!(self, Pulse::High)
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pulse::Low => write!(f, "low"),
            Pulse::High => write!(f, "high"),
        }
    }
}

/// The behavior variant assigned to a module at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// The entry node: forwards every received pulse unchanged.
    Broadcast,
    /// Toggles an on/off state on low pulses, silent on high pulses.
    FlipFlop,
    /// NAND over the last pulse remembered from each inbound edge.
    Conjunction,
    /// A terminal: receives and discards. Covers the button actuator and
    /// any destination that was never declared as a module.
    Sink,
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleKind::Broadcast => write!(f, "broadcast"),
            ModuleKind::FlipFlop => write!(f, "flip-flop"),
            ModuleKind::Conjunction => write!(f, "conjunction"),
            ModuleKind::Sink => write!(f, "sink"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_id() {
        assert!(ModuleId::BUTTON.is_button());
        assert!(!ModuleId(3).is_button());
        assert_eq!(ModuleId::BUTTON.to_string(), "BUTTON");
        assert_eq!(ModuleId(3).to_string(), "M3");
    }

    #[test]
    fn test_pulse_display() {
        assert_eq!(Pulse::Low.to_string(), "low");
        assert_eq!(Pulse::High.to_string(), "high");
        assert!(Pulse::High.is_high());
        assert!(!Pulse::Low.is_high());
    }
}
