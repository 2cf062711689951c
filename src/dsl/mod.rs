//! Parser for the module wiring-list format.
//!
//! The format is line-oriented and human-editable: one module declaration
//! per line, naming the module and its ordered destinations.
//!
//! # Grammar Overview
//!
//! ```text
//! network     = { line }
//! line        = comment | record | empty
//! comment     = '#' { any_char }
//! record      = head " -> " destination { ", " destination }
//! head        = ['%' | '&'] identifier
//! destination = identifier
//! identifier  = (letter | digit | '_')+
//! ```
//!
//! # Module Tags
//!
//! | Prefix | Behavior | Notes |
//! |--------|----------|-------|
//! | (none) | Broadcast | the entry module, named `broadcaster` |
//! | `%` | Flip-flop | toggles on low pulses, silent on high |
//! | `&` | Conjunction | NAND over remembered inbound pulses |
//!
//! Destinations that never appear on the left-hand side of any record are
//! terminal sinks: pulses delivered to them are counted and discarded.
//!
//! # Example
//!
//! ```text
//! # three flip-flops feeding an inverter
//! broadcaster -> a, b, c
//! %a -> b
//! %b -> c
//! %c -> inv
//! &inv -> a
//! ```

mod ast;
mod parser;

pub use ast::{ModuleDef, ModuleTag, NetworkAst};
pub use parser::parse;

/// Parse a wiring-list file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> crate::error::Result<NetworkAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::PulsenetError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
