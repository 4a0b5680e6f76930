//! Quantum gate trait and gate operations

use crate::{ParameterId, QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Trait for quantum gate operations
///
/// Gates are immutable and shared between circuits through `Arc`. A gate
/// whose angle depends on a variational parameter reports it through
/// [`Gate::parameter`] and produces a concrete copy of itself through
/// [`Gate::bind`].
///
/// # Example
/// ```
/// use adaptq_core::Gate;
///
/// #[derive(Debug)]
/// struct HadamardGate;
///
/// impl Gate for HadamardGate {
///     fn name(&self) -> &str { "H" }
///     fn num_qubits(&self) -> usize { 1 }
///     fn is_hermitian(&self) -> bool { true }
/// }
///
/// assert_eq!(HadamardGate.description(), "1-qubit gate 'H'");
/// ```
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "RZ")
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// Whether this gate is a unitary operation
    fn is_unitary(&self) -> bool {
        true
    }

    /// Whether this gate is hermitian (self-adjoint)
    fn is_hermitian(&self) -> bool {
        false
    }

    /// Get a description of this gate
    fn description(&self) -> String {
        format!("{}-qubit gate '{}'", self.num_qubits(), self.name())
    }

    /// Row-major unitary matrix, if the gate has a concrete one
    ///
    /// Symbolic gates return `None` until bound.
    fn matrix(&self) -> Option<Vec<Complex64>> {
        None
    }

    /// The variational parameter this gate depends on
    fn parameter(&self) -> Option<ParameterId> {
        None
    }

    /// Resolve the gate's parameter against `values`
    ///
    /// `values[id.index()]` supplies the value of parameter `id`. Returns
    /// `Ok(None)` when the gate has nothing to bind.
    ///
    /// # Errors
    /// Returns [`QuantumError::UnboundParameter`] if `values` is too short.
    fn bind(&self, _values: &[f64]) -> Result<Option<Arc<dyn Gate>>> {
        Ok(None)
    }
}

/// A gate operation applied to specific qubits
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    qubits: SmallVec<[QubitId; 2]>,
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if:
    /// - Qubit count doesn't match gate requirements
    /// - Duplicate qubits specified
    pub fn new(gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                gate.name(),
                gate.num_qubits(),
                qubits.len(),
            ));
        }

        if let Some(&dup) = qubits
            .iter()
            .enumerate()
            .find_map(|(i, q)| qubits[..i].contains(q).then_some(q))
        {
            return Err(QuantumError::DuplicateQubit(dup));
        }

        Ok(Self {
            gate,
            qubits: SmallVec::from_slice(qubits),
        })
    }

    /// Get the gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Bind the gate's parameter, keeping the same qubits
    pub fn bind(&self, values: &[f64]) -> Result<Self> {
        match self.gate.bind(values)? {
            Some(gate) => Ok(Self {
                gate,
                qubits: self.qubits.clone(),
            }),
            None => Ok(self.clone()),
        }
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.description())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
