//! Core types for adaptive-ansatz operator pools
//!
//! This crate provides the value types shared by the rest of the workspace:
//! - [`FermionOperator`]: Weighted sums of ladder-operator products
//! - [`PauliOperator`]: Weighted sums of Pauli strings
//! - [`Circuit`]: Circuit fragments built from [`Gate`]s
//! - [`ParameterId`]: Variational parameter identifiers (`x0`, `x1`, ...)
//! - [`Options`]: Named configuration values
//!
//! # Example
//! ```
//! use adaptq_core::{FermionOperator, Ladder};
//!
//! // a†₂ a₀ - a†₀ a₂
//! let raw = FermionOperator::term([Ladder::creation(2), Ladder::annihilation(0)], 1.0);
//! let generator = &raw - &raw.hermitian_conjugate();
//! assert!(generator.is_anti_hermitian(1e-12));
//! ```

pub mod circuit;
pub mod error;
pub mod fermion;
pub mod gate;
pub mod options;
pub mod parameter_id;
pub mod pauli;
pub mod qubit;

// Re-exports for convenience
pub use circuit::Circuit;
pub use error::QuantumError;
pub use fermion::{FermionOperator, Ladder, LadderKind, LadderString, COEFFICIENT_TOLERANCE};
pub use gate::{Gate, GateOp};
pub use num_complex::Complex64;
pub use options::{OptionValue, Options};
pub use parameter_id::ParameterId;
pub use pauli::{Pauli, PauliOperator, PauliString};
pub use qubit::QubitId;

/// Type alias for results in adaptq
pub type Result<T> = std::result::Result<T, QuantumError>;
