//! Parser for the wiring-list format.

use super::ast::{ModuleDef, ModuleTag, NetworkAst};
use crate::error::{PulsenetError, Result};

/// Parse a complete wiring list.
pub fn parse(input: &str) -> Result<NetworkAst> {
    let mut ast = NetworkAst::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        ast.modules.push(parse_record(line, line_no)?);
    }

    Ok(ast)
}

/// Parse one `head -> dest, dest` record.
fn parse_record(line: &str, line_no: usize) -> Result<ModuleDef> {
    let (head, rest) = line
        .split_once(" -> ")
        .ok_or_else(|| PulsenetError::parse(line_no, "expected ' -> ' between module and destinations"))?;

    let head = head.trim();
    let (tag, name) = match head.strip_prefix('%') {
        Some(name) => (ModuleTag::FlipFlop, name),
        None => match head.strip_prefix('&') {
            Some(name) => (ModuleTag::Conjunction, name),
            None => (ModuleTag::Broadcast, head),
        },
    };

    check_identifier(name, line_no)?;

    let destinations: Vec<String> = rest
        .split(',')
        .map(|dest| {
            let dest = dest.trim();
            check_identifier(dest, line_no)?;
            Ok(dest.to_string())
        })
        .collect::<Result<_>>()?;

    Ok(ModuleDef {
        tag,
        name: name.to_string(),
        destinations,
        line: line_no,
    })
}

fn check_identifier(name: &str, line_no: usize) -> Result<()> {
    if name.is_empty() {
        return Err(PulsenetError::parse(line_no, "empty identifier"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PulsenetError::parse(
            line_no,
            format!("invalid identifier '{name}'"),
        ));
    }
    Ok(())
}
