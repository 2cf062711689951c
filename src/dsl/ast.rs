//! Record types produced by the wiring-list parser.

/// A parsed wiring list: one record per declared module.
#[derive(Debug, Clone, Default)]
pub struct NetworkAst {
    /// All module declarations, in source order
    pub modules: Vec<ModuleDef>,
}

impl NetworkAst {
    /// Create a new empty wiring list.
    pub fn new() -> Self {
        Self::default()
    }
}

/// One module declaration from the wiring list.
#[derive(Debug, Clone)]
pub struct ModuleDef {
    /// Behavior tag from the name prefix
    pub tag: ModuleTag,
    /// Unique module name
    pub name: String,
    /// Ordered destination names
    pub destinations: Vec<String>,
    /// Source line number for error reporting
    pub line: usize,
}

/// Behavior tags recognized by the wiring-list syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleTag {
    /// Unprefixed name (the broadcaster entry module)
    Broadcast,
    /// `%` prefix
    FlipFlop,
    /// `&` prefix
    Conjunction,
}
