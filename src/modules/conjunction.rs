//! Conjunction module behavior.

use std::collections::HashMap;

use crate::error::{PulsenetError, Result};
use crate::network::{ModuleId, Pulse};

/// A module remembering the last pulse received from each inbound edge.
///
/// The memory has exactly one slot per inbound edge discovered at network
/// construction time, all initialized to low; slots are never added or
/// removed afterwards. On every delivery the sender's slot is overwritten
/// and the output is recomputed from the whole memory: low if every
/// remembered value is high, otherwise high (a NAND over the inputs).
#[derive(Debug, Clone)]
pub struct Conjunction {
    memory: HashMap<ModuleId, Pulse>,
}

impl Conjunction {
    /// Create a conjunction with one low-initialized slot per inbound edge.
    pub fn new(inputs: &[ModuleId]) -> Self {
        Self {
            memory: inputs.iter().map(|&id| (id, Pulse::Low)).collect(),
        }
    }

    /// Deliver a pulse from `from`, returning the emitted pulse.
    ///
    /// A sender with no memory slot is a construction-time contract
    /// violation and is reported as [`PulsenetError::UnknownSender`].
    pub fn receive(&mut self, pulse: Pulse, from: ModuleId) -> Result<Pulse> {
        let slot = self
            .memory
            .get_mut(&from)
            .ok_or(PulsenetError::UnknownSender { sender: from })?;
        *slot = pulse;

        let all_high = self.memory.values().all(|p| p.is_high());
        Ok(if all_high { Pulse::Low } else { Pulse::High })
    }

    /// Number of remembered inbound edges.
    pub fn input_count(&self) -> usize {
        self.memory.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<ModuleId> {
        raw.iter().map(|&n| ModuleId(n)).collect()
    }

    #[test]
    fn test_single_input_inverts() {
        let mut con = Conjunction::new(&ids(&[1]));
        assert_eq!(con.receive(Pulse::High, ModuleId(1)).unwrap(), Pulse::Low);
        assert_eq!(con.receive(Pulse::Low, ModuleId(1)).unwrap(), Pulse::High);
    }

    #[test]
    fn test_low_iff_all_remembered_high() {
        let mut con = Conjunction::new(&ids(&[1, 2, 3]));
        assert_eq!(con.input_count(), 3);

        // Memory starts all-low, so any delivery leaves at least one low slot
        assert_eq!(con.receive(Pulse::High, ModuleId(1)).unwrap(), Pulse::High);
        assert_eq!(con.receive(Pulse::High, ModuleId(2)).unwrap(), Pulse::High);
        // The last slot going high flips the output to low
        assert_eq!(con.receive(Pulse::High, ModuleId(3)).unwrap(), Pulse::Low);

        // Flipping any single slot back to low flips the output to high
        assert_eq!(con.receive(Pulse::Low, ModuleId(2)).unwrap(), Pulse::High);
        assert_eq!(con.receive(Pulse::High, ModuleId(2)).unwrap(), Pulse::Low);
    }

    #[test]
    fn test_unknown_sender_is_fatal() {
        let mut con = Conjunction::new(&ids(&[1, 2]));
        let err = con.receive(Pulse::High, ModuleId(9)).unwrap_err();
        assert!(matches!(
            err,
            PulsenetError::UnknownSender { sender } if sender == ModuleId(9)
        ));
        // The failed delivery must not have grown the memory
        assert_eq!(con.input_count(), 2);
    }
}
