//! Standard gates for Pauli-exponential circuits
//!
//! The rotation gates take an [`Angle`], which is either a fixed number or a
//! scaled variational parameter resolved later by `Circuit::bind`.

use crate::matrices;
use adaptq_core::{Gate, ParameterId, QuantumError, Result};
use num_complex::Complex64;
use std::fmt;
use std::sync::Arc;

/// Rotation angle, fixed or linear in one variational parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    /// A concrete angle in radians
    Fixed(f64),
    /// `scale · θ` where θ is the value of `param`
    Symbolic { param: ParameterId, scale: f64 },
}

impl Angle {
    /// Angle linear in `param`
    pub const fn symbolic(param: ParameterId, scale: f64) -> Self {
        Angle::Symbolic { param, scale }
    }

    /// The concrete value, if the angle is fixed
    pub fn value(&self) -> Option<f64> {
        match self {
            Angle::Fixed(theta) => Some(*theta),
            Angle::Symbolic { .. } => None,
        }
    }

    pub fn parameter(&self) -> Option<ParameterId> {
        match self {
            Angle::Fixed(_) => None,
            Angle::Symbolic { param, .. } => Some(*param),
        }
    }

    /// Resolve against `values`, indexed by parameter
    ///
    /// # Errors
    /// Returns [`QuantumError::UnboundParameter`] if `values` has no entry
    /// for the parameter.
    pub fn resolve(&self, values: &[f64]) -> Result<f64> {
        match *self {
            Angle::Fixed(theta) => Ok(theta),
            Angle::Symbolic { param, scale } => values
                .get(param.index())
                .map(|theta| scale * theta)
                .ok_or(QuantumError::UnboundParameter(param)),
        }
    }
}

impl From<f64> for Angle {
    fn from(theta: f64) -> Self {
        Angle::Fixed(theta)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Fixed(theta) => write!(f, "{:.4}", theta),
            Angle::Symbolic { param, scale } => write!(f, "{:.4}*{}", scale, param),
        }
    }
}

/// Hadamard gate
///
/// Maps the Z eigenbasis onto the X eigenbasis: H·Z·H = X
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl Gate for Hadamard {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "H".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(matrices::flatten(&matrices::HADAMARD))
    }
}

/// CNOT gate (Controlled-NOT)
///
/// The first qubit of the operation is the control.
#[derive(Debug, Clone, Copy)]
pub struct CNot;

impl Gate for CNot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "CNOT".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(matrices::flatten(&matrices::CNOT))
    }
}

/// Rotation-X gate
#[derive(Debug, Clone, Copy)]
pub struct RotationX {
    theta: Angle,
}

impl RotationX {
    pub fn new(theta: impl Into<Angle>) -> Self {
        Self {
            theta: theta.into(),
        }
    }

    pub const fn angle(&self) -> Angle {
        self.theta
    }
}

impl Gate for RotationX {
    fn name(&self) -> &str {
        "RX"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        format!("RX({})", self.theta)
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        self.theta
            .value()
            .map(|theta| matrices::flatten(&matrices::rotation_x(theta)))
    }

    fn parameter(&self) -> Option<ParameterId> {
        self.theta.parameter()
    }

    fn bind(&self, values: &[f64]) -> Result<Option<Arc<dyn Gate>>> {
        if self.theta.parameter().is_none() {
            return Ok(None);
        }
        let theta = self.theta.resolve(values)?;
        Ok(Some(Arc::new(RotationX::new(theta))))
    }
}

/// Rotation-Z gate
///
/// RZ(θ) = exp(-iθZ/2)
#[derive(Debug, Clone, Copy)]
pub struct RotationZ {
    theta: Angle,
}

impl RotationZ {
    pub fn new(theta: impl Into<Angle>) -> Self {
        Self {
            theta: theta.into(),
        }
    }

    pub const fn angle(&self) -> Angle {
        self.theta
    }
}

impl Gate for RotationZ {
    fn name(&self) -> &str {
        "RZ"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        format!("RZ({})", self.theta)
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        self.theta
            .value()
            .map(|theta| matrices::flatten(&matrices::rotation_z(theta)))
    }

    fn parameter(&self) -> Option<ParameterId> {
        self.theta.parameter()
    }

    fn bind(&self, values: &[f64]) -> Result<Option<Arc<dyn Gate>>> {
        if self.theta.parameter().is_none() {
            return Ok(None);
        }
        let theta = self.theta.resolve(values)?;
        Ok(Some(Arc::new(RotationZ::new(theta))))
    }
}
