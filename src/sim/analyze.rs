//! Analysis modes built on repeated press simulation.

use std::collections::HashMap;

use crate::error::{PulsenetError, Result};
use crate::network::{ModuleId, Network, Pulse};

use super::simulator::{PressCounts, Simulator};
use super::MAX_ALIGNMENT_PRESSES;

/// Run exactly `presses` button presses and return the product of the
/// total low and high delivery counts.
pub fn pulse_tally(network: Network, presses: u64) -> Result<u64> {
    let mut sim = Simulator::new(network);
    let mut total = PressCounts::default();
    for _ in 0..presses {
        total.add(sim.press()?);
    }
    Ok(total.product())
}

/// Predict the first press at which `target` receives a low pulse, without
/// simulating that far.
///
/// The unique module feeding `target` (its penultimate module) is a
/// conjunction in the circuit family this shortcut is built for; it emits
/// low into the target exactly when every one of its feeders — the watch
/// set — has sent high within one press. Each feeder is observed until its
/// first high delivery into the penultimate module, and the recorded press
/// numbers are combined with a least common multiple.
///
/// This relies on an empirical property of the input family, not a proven
/// invariant: each feeder re-emits high with a fixed period equal to its
/// first-emission press number. The loop is capped at
/// [`MAX_ALIGNMENT_PRESSES`] so a topology violating that assumption
/// surfaces [`PulsenetError::PressLimitExceeded`] instead of hanging.
pub fn first_alignment(network: Network, target: &str) -> Result<u64> {
    let target_id = network
        .find_module(target)
        .ok_or_else(|| PulsenetError::TargetUnreachable {
            target: target.to_string(),
        })?;

    // The module feeding the target; first by construction order if the
    // topology has several.
    let penultimate = network
        .inputs(target_id)
        .first()
        .copied()
        .ok_or_else(|| PulsenetError::TargetUnreachable {
            target: target.to_string(),
        })?;

    let watch: Vec<ModuleId> = network.inputs(penultimate).to_vec();
    if watch.is_empty() {
        return Err(PulsenetError::EmptyWatchSet {
            target: target.to_string(),
        });
    }

    let mut first_high: HashMap<ModuleId, u64> = HashMap::new();
    let mut sim = Simulator::new(network);

    for press in 1..=MAX_ALIGNMENT_PRESSES {
        sim.press_observed(|d| {
            if d.to == penultimate && d.pulse == Pulse::High && !first_high.contains_key(&d.from) {
                first_high.insert(d.from, press);
            }
        })?;

        if first_high.len() == watch.len() {
            return Ok(first_high.values().fold(1, |acc, &n| lcm(acc, n)));
        }
    }

    Err(PulsenetError::PressLimitExceeded {
        limit: MAX_ALIGNMENT_PRESSES,
    })
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    (a / gcd(a, b)) * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl;
    use crate::network::validate_network;

    fn build(input: &str) -> Network {
        let net = Network::from_ast(dsl::parse(input).unwrap()).unwrap();
        validate_network(&net).unwrap();
        net
    }

    const RING: &str = "broadcaster -> a, b, c\n\
                        %a -> b\n\
                        %b -> c\n\
                        %c -> inv\n\
                        &inv -> a\n";

    const FEEDBACK: &str = "broadcaster -> a\n\
                            %a -> inv, con\n\
                            &inv -> b\n\
                            %b -> con\n\
                            &con -> output\n";

    // Two flip-flop chains of different depth feeding one conjunction. A
    // chain of depth k first emits high at press 2^(k-1), so the feeders
    // align every lcm(2, 4) = 4 presses.
    const TWO_CHAINS: &str = "broadcaster -> a, x\n\
                              %a -> ab\n\
                              %ab -> pen\n\
                              %x -> xb\n\
                              %xb -> xc\n\
                              %xc -> pen\n\
                              &pen -> rx\n";

    #[test]
    fn test_tally_ring_1000_presses() {
        assert_eq!(pulse_tally(build(RING), 1000).unwrap(), 32_000_000);
    }

    #[test]
    fn test_tally_feedback_1000_presses() {
        assert_eq!(pulse_tally(build(FEEDBACK), 1000).unwrap(), 11_687_500);
    }

    #[test]
    fn test_tally_is_idempotent_across_constructions() {
        let net = build(FEEDBACK);
        let once = pulse_tally(net.clone(), 250).unwrap();
        let again = pulse_tally(net, 250).unwrap();
        assert_eq!(once, again);
    }

    #[test]
    fn test_alignment_two_chains() {
        assert_eq!(first_alignment(build(TWO_CHAINS), "rx").unwrap(), 4);
    }

    #[test]
    fn test_alignment_unknown_target() {
        let err = first_alignment(build(RING), "rx").unwrap_err();
        assert!(matches!(
            err,
            PulsenetError::TargetUnreachable { ref target } if target == "rx"
        ));
    }

    #[test]
    fn test_alignment_empty_watch_set() {
        // The target is fed directly by the broadcaster, whose only feeder
        // is the button; the button never appears in any edge list, so the
        // watch set is empty.
        let net = build("broadcaster -> rx\n");
        let err = first_alignment(net, "rx").unwrap_err();
        assert!(matches!(err, PulsenetError::EmptyWatchSet { .. }));
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(2, 4), 4);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!([4u64, 6, 10].iter().fold(1, |acc, &n| lcm(acc, n)), 60);
        assert_eq!(lcm(7, 13), 91);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(5, 0), 5);
    }
}
