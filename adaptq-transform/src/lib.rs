//! Fermion-to-qubit encodings for adaptq
//!
//! # Example
//!
//! ```
//! use adaptq_core::{FermionOperator, Ladder};
//! use adaptq_transform::{FermionTransform, JordanWigner};
//!
//! let hop = FermionOperator::term([Ladder::creation(1), Ladder::annihilation(0)], 1.0);
//! let generator = &hop - &hop.hermitian_conjugate();
//!
//! let qubit_op = JordanWigner.transform(&generator);
//! assert!(qubit_op.is_anti_hermitian(1e-12));
//! ```

pub mod jordan_wigner;
pub mod transform;

pub use jordan_wigner::JordanWigner;
pub use transform::FermionTransform;
