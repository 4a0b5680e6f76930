//! Error types for operator pools

use adaptq_core::QuantumError;
use thiserror::Error;

/// Errors raised while configuring, generating or reading an operator pool
#[derive(Debug, Error)]
pub enum PoolError {
    /// A required option was never supplied
    #[error("Pool '{pool}' requires option '{option}'")]
    MissingOption {
        pool: &'static str,
        option: &'static str,
    },

    /// An option was supplied with the wrong type or an unusable value
    #[error("Option '{option}' is invalid: {reason}")]
    InvalidOption { option: String, reason: String },

    /// An accessor was used before the pool was generated
    #[error("generate must be called first")]
    NotGenerated,

    /// Pool index outside the generated pool
    #[error("Pool index {index} out of range for pool of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The excitation operator vanishes under anti-Hermitization
    #[error("Excitation operator {index} is Hermitian: its anti-Hermitian part has zero norm")]
    DegenerateGenerator { index: usize },

    /// No service registered under the requested name
    #[error("No {kind} registered under '{name}'")]
    ServiceUnavailable { kind: &'static str, name: String },

    /// Electron and qubit counts do not describe a closed-shell orbital space
    #[error("Invalid orbital space for {n_electrons} electrons on {n_qubits} qubits: {reason}")]
    InvalidOrbitalSpace {
        n_electrons: usize,
        n_qubits: usize,
        reason: &'static str,
    },

    /// Operator or circuit error from the core types
    #[error(transparent)]
    Quantum(#[from] QuantumError),
}

impl PoolError {
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }

    pub fn service_unavailable(kind: &'static str, name: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            kind,
            name: name.into(),
        }
    }
}
