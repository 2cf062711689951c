//! Network graph structure.

use std::collections::HashMap;

use super::types::{ModuleId, ModuleKind};
use crate::dsl::{ModuleTag, NetworkAst};
use crate::error::{PulsenetError, Result};

/// The reserved name of the entry module.
pub const BROADCASTER: &str = "broadcaster";

/// The reserved name of the external actuator.
pub const BUTTON: &str = "button";

/// A complete module network ready for simulation.
///
/// The network is the immutable half of a scenario: edge lists and kinds
/// never change after construction. Behavior state lives in the simulator,
/// which builds one behavior instance per module from this graph.
#[derive(Debug, Clone)]
pub struct Network {
    /// Mapping from module names to module IDs
    name_map: HashMap<String, ModuleId>,

    /// Reverse mapping from module IDs to names (for error messages)
    names: Vec<String>,

    /// Behavior variant per module, indexed by ID
    kinds: Vec<ModuleKind>,

    /// Ordered destination lists per module, indexed by ID.
    /// Order is load-bearing: it determines delivery enqueue order.
    edges: Vec<Vec<ModuleId>>,

    /// Reverse lookup: for each module, the modules whose edge list contains
    /// it. Used to size conjunction memories at construction time.
    inputs: Vec<Vec<ModuleId>>,

    /// The entry module driven by the button
    broadcaster: ModuleId,
}

impl Network {
    /// Build a network from a parsed wiring list.
    ///
    /// Destinations that never appear as declared modules are interned as
    /// terminal sinks with empty edge lists. The button actuator is always
    /// [`ModuleId::BUTTON`] and feeds the broadcaster implicitly (it has no
    /// edge list entry; the simulator seeds its delivery directly).
    pub fn from_ast(ast: NetworkAst) -> Result<Self> {
        let mut name_map = HashMap::new();
        let mut names = Vec::new();
        let mut kinds = Vec::new();

        // The button is always module 0
        name_map.insert(BUTTON.to_string(), ModuleId::BUTTON);
        names.push(BUTTON.to_string());
        kinds.push(ModuleKind::Sink);

        // Assign IDs to all declared modules, in declaration order
        for def in &ast.modules {
            if name_map.contains_key(&def.name) {
                return Err(PulsenetError::DuplicateModule {
                    name: def.name.clone(),
                });
            }
            let id = ModuleId(names.len());
            name_map.insert(def.name.clone(), id);
            names.push(def.name.clone());
            kinds.push(match def.tag {
                ModuleTag::Broadcast => ModuleKind::Broadcast,
                ModuleTag::FlipFlop => ModuleKind::FlipFlop,
                ModuleTag::Conjunction => ModuleKind::Conjunction,
            });
        }

        // Also add destinations that were never declared: terminal sinks
        for def in &ast.modules {
            for dest in &def.destinations {
                if !name_map.contains_key(dest) {
                    let id = ModuleId(names.len());
                    name_map.insert(dest.clone(), id);
                    names.push(dest.clone());
                    kinds.push(ModuleKind::Sink);
                }
            }
        }

        let broadcaster = name_map
            .get(BROADCASTER)
            .copied()
            .ok_or(PulsenetError::MissingBroadcaster)?;

        // Resolve edge lists; sinks (and the button) keep empty lists
        let mut edges = vec![Vec::new(); names.len()];
        for def in &ast.modules {
            let id = name_map[&def.name];
            edges[id.0] = def
                .destinations
                .iter()
                .map(|dest| name_map[dest])
                .collect();
        }

        // Derive the reverse lookup
        let mut inputs = vec![Vec::new(); names.len()];
        for (from, dests) in edges.iter().enumerate() {
            for dest in dests {
                inputs[dest.0].push(ModuleId(from));
            }
        }

        Ok(Network {
            name_map,
            names,
            kinds,
            edges,
            inputs,
            broadcaster,
        })
    }

    /// Number of modules, including the button and derived sinks.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the network has no modules beyond the button.
    pub fn is_empty(&self) -> bool {
        self.names.len() <= 1
    }

    /// The entry module driven by the button.
    pub fn broadcaster(&self) -> ModuleId {
        self.broadcaster
    }

    /// Find a module ID by name.
    pub fn find_module(&self, name: &str) -> Option<ModuleId> {
        self.name_map.get(name).copied()
    }

    /// Get the name of a module.
    pub fn module_name(&self, id: ModuleId) -> &str {
        &self.names[id.0]
    }

    /// Get the behavior variant of a module.
    pub fn kind(&self, id: ModuleId) -> ModuleKind {
        self.kinds[id.0]
    }

    /// Get the ordered destination list of a module.
    /// Empty for sinks and the button.
    pub fn destinations(&self, id: ModuleId) -> &[ModuleId] {
        &self.edges[id.0]
    }

    /// Get the modules whose edge list contains `id`.
    pub fn inputs(&self, id: ModuleId) -> &[ModuleId] {
        &self.inputs[id.0]
    }
}
