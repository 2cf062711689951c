//! Error types for the Pulsenet module-network simulator.
//!
//! This module provides a unified error type [`PulsenetError`] that covers
//! all error conditions that can occur during wiring-list parsing, network
//! construction, and simulation.

use thiserror::Error;

use crate::network::ModuleId;

/// Result type alias using [`PulsenetError`].
pub type Result<T> = std::result::Result<T, PulsenetError>;

/// Unified error type for all Pulsenet operations.
#[derive(Error, Debug)]
pub enum PulsenetError {
    // ============ Wiring-List Parsing Errors ============
    /// Error while parsing a wiring-list line
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    // ============ Network Construction Errors ============
    /// A module name was declared more than once
    #[error("Duplicate module name '{name}'")]
    DuplicateModule { name: String },

    /// A module lists the same destination twice
    #[error("Module '{module}' lists destination '{destination}' more than once")]
    DuplicateDestination { module: String, destination: String },

    /// The network has no broadcaster entry node
    #[error("Network has no 'broadcaster' module")]
    MissingBroadcaster,

    /// Invalid network topology
    #[error("Invalid network topology: {message}")]
    InvalidTopology { message: String },

    // ============ Simulation Errors ============
    /// A conjunction received a pulse from a sender it never registered.
    ///
    /// Conjunction memories enumerate every true inbound edge when the
    /// network is built, so an unregistered sender means the topology the
    /// simulator is running does not match the one the behaviors were
    /// constructed from. This is a construction-time contract violation,
    /// not a recoverable runtime condition.
    #[error("Conjunction received a pulse from unregistered sender {sender}")]
    UnknownSender { sender: ModuleId },

    // ============ Analysis Errors ============
    /// The cycle-detection target has no inbound edge
    #[error("Target '{target}' is not fed by any module")]
    TargetUnreachable { target: String },

    /// The watch set feeding the target's penultimate module is empty
    #[error("Watch set for target '{target}' is empty; fall back to direct simulation")]
    EmptyWatchSet { target: String },

    /// The alignment loop hit its safety cap before every watch-set member
    /// emitted a high pulse
    #[error("Watch set did not align within {limit} presses")]
    PressLimitExceeded { limit: u64 },

    // ============ I/O Errors ============
    /// Error reading a network description file
    #[error("Failed to read network file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PulsenetError {
    /// Create a parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-topology error.
    pub fn topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
