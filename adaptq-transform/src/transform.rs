//! Fermion-to-qubit encodings

use adaptq_core::{FermionOperator, PauliOperator};

/// Maps fermionic operators onto equivalent qubit operators
///
/// Implementations are shared between pools behind an `Arc` and may be
/// called from several threads during pool generation.
pub trait FermionTransform: Send + Sync {
    /// Name the encoding is registered under (e.g. "jw")
    fn name(&self) -> &str;

    /// Encode `op` as a sum of Pauli strings
    fn transform(&self, op: &FermionOperator) -> PauliOperator;
}
