//! Error types for adaptq-core

use crate::{ParameterId, QubitId};
use thiserror::Error;

/// Errors raised by the core operator, circuit and option types
#[derive(Debug, Error)]
pub enum QuantumError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Duplicate qubit in gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// A symbolic parameter had no value during binding
    #[error("No value bound for parameter {0}")]
    UnboundParameter(ParameterId),

    /// Text could not be parsed into an operator or identifier
    #[error("Cannot parse '{input}': {reason}")]
    ParseError { input: String, reason: String },

    /// Normalization requested for an operator whose norm is zero
    #[error("Operator has zero norm and cannot be normalized")]
    ZeroNorm,

    /// A term that must be anti-Hermitian carries a real coefficient part
    #[error("Term '{term}' is not anti-Hermitian: coefficient {re} + {im}i")]
    NotAntiHermitian { term: String, re: f64, im: f64 },

    /// Option document could not be decoded
    #[error("Invalid options document: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create a parse error for `input`
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
