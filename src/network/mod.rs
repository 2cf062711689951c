//! Network graph representation and validation.
//!
//! This module provides the internal representation of a module network
//! after parsing. The [`Network`] struct holds the immutable adjacency:
//! interned module identifiers, behavior kinds, ordered destination lists,
//! and the derived reverse lookup used to size conjunction memories.

mod graph;
mod types;
mod validate;

pub use graph::{Network, BROADCASTER, BUTTON};
pub use types::*;
pub use validate::validate_network;
