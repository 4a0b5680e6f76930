//! Circuit synthesis for exp(θ·G) with G an anti-Hermitian Pauli sum
//!
//! Writing `G = i·Σₖ hₖ·Pₖ` with real `hₖ`, each factor `exp(iθhₖPₖ)` is
//! emitted as:
//!
//! 1. a basis change mapping every factor of `Pₖ` to Z (X → H, Y → RX(π/2))
//! 2. a CNOT ladder collecting the parity on the last qubit
//! 3. `RZ(−2hₖθ)` on the last qubit
//! 4. the reversed ladder and the inverse basis change
//!
//! Terms are emitted in the order the operator lists them. Products of
//! non-commuting terms are not exact; this is the usual first-order
//! product formula.

use crate::factory::InstructionFactory;
use crate::standard::{Angle, CNot, Hadamard, RotationX, RotationZ};
use adaptq_core::{
    Circuit, ParameterId, Pauli, PauliOperator, PauliString, QuantumError, QubitId, Result,
};
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;
use tracing::debug;

/// Real coefficient parts at or below this are treated as zero
pub const ANTI_HERMITIAN_TOLERANCE: f64 = 1e-10;

/// Factory for `exp(θ·G)` fragments, registered as "exp_i_theta"
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpITheta;

impl ExpITheta {
    pub const NAME: &'static str = "exp_i_theta";

    pub fn new() -> Self {
        Self
    }

    /// Synthesize directly from an operator value
    ///
    /// # Errors
    /// Returns [`QuantumError::NotAntiHermitian`] if a term carries a real
    /// coefficient part.
    pub fn synthesize_operator(
        &self,
        generator: &PauliOperator,
        param: ParameterId,
    ) -> Result<Circuit> {
        let width = generator.num_qubits().max(1);
        let mut circuit = Circuit::new(width);

        for (string, coeff) in generator.terms() {
            if coeff.re.abs() > ANTI_HERMITIAN_TOLERANCE {
                return Err(QuantumError::NotAntiHermitian {
                    term: string.to_string(),
                    re: coeff.re,
                    im: coeff.im,
                });
            }
            // identity terms only contribute a global phase
            if string.is_identity() {
                continue;
            }
            append_pauli_rotation(&mut circuit, string, -2.0 * coeff.im, param)?;
        }

        debug!(
            terms = generator.len(),
            gates = circuit.len(),
            qubits = width,
            %param,
            "synthesized exp_i_theta fragment"
        );
        Ok(circuit)
    }
}

impl InstructionFactory for ExpITheta {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn synthesize(&self, generator: &str, param: ParameterId) -> Result<Circuit> {
        let operator: PauliOperator = generator.parse()?;
        self.synthesize_operator(&operator, param)
    }
}

fn append_basis_change(circuit: &mut Circuit, string: &PauliString, undo: bool) -> Result<()> {
    let angle = if undo { -FRAC_PI_2 } else { FRAC_PI_2 };
    for &(qubit, pauli) in string.ops() {
        let q = QubitId::new(qubit);
        match pauli {
            Pauli::X => circuit.add_gate(Arc::new(Hadamard), &[q])?,
            Pauli::Y => circuit.add_gate(Arc::new(RotationX::new(angle)), &[q])?,
            Pauli::Z => {}
        }
    }
    Ok(())
}

/// Append `exp(-i·scale·θ/2 · P)` as RZ(scale·θ) conjugated into the `P` basis
fn append_pauli_rotation(
    circuit: &mut Circuit,
    string: &PauliString,
    scale: f64,
    param: ParameterId,
) -> Result<()> {
    let qubits: Vec<QubitId> = string.ops().iter().map(|&(q, _)| QubitId::new(q)).collect();

    append_basis_change(circuit, string, false)?;

    for pair in qubits.windows(2) {
        circuit.add_gate(Arc::new(CNot), &[pair[0], pair[1]])?;
    }

    if let Some(&target) = qubits.last() {
        circuit.add_gate(
            Arc::new(RotationZ::new(Angle::symbolic(param, scale))),
            &[target],
        )?;
    }

    for pair in qubits.windows(2).rev() {
        circuit.add_gate(Arc::new(CNot), &[pair[0], pair[1]])?;
    }

    append_basis_change(circuit, string, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_names(circuit: &Circuit) -> Vec<String> {
        circuit.operations().map(|op| op.to_string()).collect()
    }

    #[test]
    fn test_single_z_term() {
        let circuit = ExpITheta
            .synthesize("(0,0.5) Z2", ParameterId::new(0))
            .unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(gate_names(&circuit), vec!["RZ(-1.0000*x0)(q2)"]);
    }

    #[test]
    fn test_xy_term_layout() {
        let circuit = ExpITheta
            .synthesize("(0,0.25) X0 Y1", ParameterId::new(7))
            .unwrap();
        assert_eq!(
            gate_names(&circuit),
            vec![
                "H(q0)",
                "RX(1.5708)(q1)",
                "CNOT(q0, q1)",
                "RZ(-0.5000*x7)(q1)",
                "CNOT(q0, q1)",
                "H(q0)",
                "RX(-1.5708)(q1)",
            ]
        );
        assert_eq!(circuit.parameters(), vec![ParameterId::new(7)]);
    }

    #[test]
    fn test_ladder_spans_all_factors() {
        let circuit = ExpITheta
            .synthesize("(0,1) Z0 Z1 Z3", ParameterId::new(0))
            .unwrap();
        let names = gate_names(&circuit);
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "CNOT(q0, q1)");
        assert_eq!(names[1], "CNOT(q1, q3)");
        assert_eq!(names[2], "RZ(-2.0000*x0)(q3)");
        assert_eq!(names[3], "CNOT(q1, q3)");
        assert_eq!(names[4], "CNOT(q0, q1)");
    }

    #[test]
    fn test_identity_term_is_skipped() {
        let circuit = ExpITheta
            .synthesize("(0,0.3) I + (0,0.1) X0", ParameterId::new(0))
            .unwrap();
        assert_eq!(circuit.len(), 3);
    }

    #[test]
    fn test_empty_generator() {
        let circuit = ExpITheta.synthesize("0", ParameterId::new(0)).unwrap();
        assert_eq!(circuit.num_qubits(), 1);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_hermitian_term_rejected() {
        let err = ExpITheta
            .synthesize("(0.5,0) X0 X1", ParameterId::new(0))
            .unwrap_err();
        assert!(matches!(err, QuantumError::NotAntiHermitian { .. }));
    }

    #[test]
    fn test_malformed_generator_rejected() {
        let err = ExpITheta
            .synthesize("(0,1) W0", ParameterId::new(0))
            .unwrap_err();
        assert!(matches!(err, QuantumError::ParseError { .. }));
    }
}
