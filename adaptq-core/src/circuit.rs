//! Circuit fragments

use crate::gate::Gate;
use crate::{GateOp, ParameterId, QuantumError, QubitId, Result};
use std::sync::Arc;

/// A quantum circuit
///
/// Pools hand these out as the fragment implementing one generator; the
/// ansatz-growth loop appends fragments to its running circuit.
///
/// # Example
/// ```
/// use adaptq_core::Circuit;
///
/// let circuit = Circuit::new(3);
/// assert_eq!(circuit.num_qubits(), 3);
/// assert!(circuit.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create a new quantum circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Create a circuit with pre-allocated capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit is empty (no operations)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Add a gate operation to the circuit
    ///
    /// # Errors
    /// Returns error if any qubit index is out of bounds
    pub fn add_gate(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        for &qubit in qubits {
            if qubit.index() >= self.num_qubits {
                return Err(QuantumError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }

        let gate_op = GateOp::new(gate, qubits)?;
        self.operations.push(gate_op);
        Ok(())
    }

    /// Append every operation of `other` to this circuit
    ///
    /// # Errors
    /// Returns error if `other` is wider than this circuit
    pub fn append(&mut self, other: &Circuit) -> Result<()> {
        if other.num_qubits > self.num_qubits {
            return Err(QuantumError::invalid_qubit(
                other.num_qubits - 1,
                self.num_qubits,
            ));
        }
        self.operations.extend(other.operations.iter().cloned());
        Ok(())
    }

    /// Get an iterator over the operations
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Clear all operations from the circuit
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Symbolic parameters used by the circuit, sorted and deduplicated
    pub fn parameters(&self) -> Vec<ParameterId> {
        let mut params: Vec<ParameterId> = self
            .operations
            .iter()
            .filter_map(|op| op.gate().parameter())
            .collect();
        params.sort_unstable();
        params.dedup();
        params
    }

    /// Produce a copy with every symbolic angle resolved against `values`
    ///
    /// # Errors
    /// Returns [`QuantumError::UnboundParameter`] for a parameter whose
    /// index is outside `values`.
    pub fn bind(&self, values: &[f64]) -> Result<Circuit> {
        let operations = self
            .operations
            .iter()
            .map(|op| op.bind(values))
            .collect::<Result<Vec<_>>>()?;
        Ok(Circuit {
            num_qubits: self.num_qubits,
            operations,
        })
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Circuit({} qubits, {} operations)", self.num_qubits, self.len())?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockGate {
        name: String,
        num_qubits: usize,
    }

    impl Gate for MockGate {
        fn name(&self) -> &str {
            &self.name
        }

        fn num_qubits(&self) -> usize {
            self.num_qubits
        }
    }

    // Angle-carrying gate: symbolic until bound
    #[derive(Debug)]
    struct MockRotation {
        param: Option<ParameterId>,
        angle: f64,
    }

    impl Gate for MockRotation {
        fn name(&self) -> &str {
            "R"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn parameter(&self) -> Option<ParameterId> {
            self.param
        }

        fn bind(&self, values: &[f64]) -> Result<Option<Arc<dyn Gate>>> {
            match self.param {
                Some(id) => {
                    let value = values
                        .get(id.index())
                        .ok_or(QuantumError::UnboundParameter(id))?;
                    Ok(Some(Arc::new(MockRotation {
                        param: None,
                        angle: *value,
                    })))
                }
                None => Ok(None),
            }
        }

        fn description(&self) -> String {
            format!("R({})", self.angle)
        }
    }

    fn h() -> Arc<MockGate> {
        Arc::new(MockGate {
            name: "H".to_string(),
            num_qubits: 1,
        })
    }

    fn rotation(index: usize) -> Arc<MockRotation> {
        Arc::new(MockRotation {
            param: Some(ParameterId::new(index)),
            angle: 0.0,
        })
    }

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_circuit_zero_qubits() {
        Circuit::new(0);
    }

    #[test]
    fn test_add_gate_invalid_qubit() {
        let mut circuit = Circuit::new(2);
        let result = circuit.add_gate(h(), &[QubitId::new(5)]);

        if let Err(QuantumError::InvalidQubit(idx, num)) = result {
            assert_eq!(idx, 5);
            assert_eq!(num, 2);
        } else {
            panic!("Expected InvalidQubit error");
        }
    }

    #[test]
    fn test_append_fragment() {
        let mut ansatz = Circuit::new(4);
        let mut fragment = Circuit::new(2);
        fragment.add_gate(h(), &[QubitId::new(1)]).unwrap();

        ansatz.append(&fragment).unwrap();
        ansatz.append(&fragment).unwrap();
        assert_eq!(ansatz.len(), 2);
    }

    #[test]
    fn test_append_wider_fragment_fails() {
        let mut ansatz = Circuit::new(2);
        let fragment = Circuit::new(4);
        assert!(ansatz.append(&fragment).is_err());
    }

    #[test]
    fn test_parameters_sorted_and_deduplicated() {
        let mut circuit = Circuit::new(1);
        circuit.add_gate(rotation(3), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(h(), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(rotation(1), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(rotation(3), &[QubitId::new(0)]).unwrap();

        assert_eq!(
            circuit.parameters(),
            vec![ParameterId::new(1), ParameterId::new(3)]
        );
    }

    #[test]
    fn test_bind_resolves_symbols() {
        let mut circuit = Circuit::new(1);
        circuit.add_gate(rotation(0), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(h(), &[QubitId::new(0)]).unwrap();

        let bound = circuit.bind(&[0.25]).unwrap();
        assert!(bound.parameters().is_empty());
        assert_eq!(bound.len(), 2);
        assert_eq!(bound.get_operation(0).unwrap().gate().description(), "R(0.25)");
    }

    #[test]
    fn test_bind_missing_value() {
        let mut circuit = Circuit::new(1);
        circuit.add_gate(rotation(2), &[QubitId::new(0)]).unwrap();

        let result = circuit.bind(&[0.1]);
        assert!(matches!(result, Err(QuantumError::UnboundParameter(id)) if id.index() == 2));
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(h(), &[QubitId::new(0)]).unwrap();

        let display = format!("{}", circuit);
        assert!(display.contains("2 qubits"));
        assert!(display.contains("1 operations"));
    }
}
