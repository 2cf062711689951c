//! Network validation.

use std::collections::HashSet;

use crate::error::{PulsenetError, Result};

use super::{ModuleId, Network};

/// Validate a network for simulation.
///
/// Checks:
/// - The network declares at least one module
/// - The broadcaster has at least one destination
/// - No module lists the same destination twice
pub fn validate_network(network: &Network) -> Result<()> {
    if network.is_empty() {
        return Err(PulsenetError::topology("Network has no modules"));
    }

    if network.destinations(network.broadcaster()).is_empty() {
        return Err(PulsenetError::topology("Broadcaster has no destinations"));
    }

    for idx in 0..network.len() {
        let id = ModuleId(idx);
        let mut seen = HashSet::new();
        for &dest in network.destinations(id) {
            if !seen.insert(dest) {
                return Err(PulsenetError::DuplicateDestination {
                    module: network.module_name(id).to_string(),
                    destination: network.module_name(dest).to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl;

    #[test]
    fn test_valid_network() {
        let ast = dsl::parse("broadcaster -> a\n%a -> output\n").unwrap();
        let net = Network::from_ast(ast).unwrap();
        assert!(validate_network(&net).is_ok());
    }

    #[test]
    fn test_broadcaster_without_destinations() {
        // The wiring-list parser cannot produce a record without
        // destinations, but a hand-built AST can.
        use crate::dsl::{ModuleDef, ModuleTag, NetworkAst};
        let ast = NetworkAst {
            modules: vec![ModuleDef {
                tag: ModuleTag::Broadcast,
                name: "broadcaster".to_string(),
                destinations: Vec::new(),
                line: 1,
            }],
        };
        let net = Network::from_ast(ast).unwrap();
        let err = validate_network(&net).unwrap_err();
        assert!(matches!(err, PulsenetError::InvalidTopology { .. }));
    }

    #[test]
    fn test_duplicate_destination() {
        let ast = dsl::parse("broadcaster -> a\n%a -> b, b\n").unwrap();
        let net = Network::from_ast(ast).unwrap();
        let err = validate_network(&net).unwrap_err();
        assert!(matches!(
            err,
            PulsenetError::DuplicateDestination { ref module, ref destination }
                if module == "a" && destination == "b"
        ));
    }
}
