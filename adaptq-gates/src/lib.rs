//! Gates and instruction factories for adaptq
//!
//! This crate provides the small gate set needed to exponentiate Pauli
//! sums (H, RX, RZ, CNOT) and the [`ExpITheta`] instruction factory that
//! turns an anti-Hermitian generator into a circuit fragment symbolic in one
//! variational parameter.
//!
//! # Example
//!
//! ```
//! use adaptq_core::ParameterId;
//! use adaptq_gates::{ExpITheta, InstructionFactory};
//!
//! let fragment = ExpITheta
//!     .synthesize("(0,0.5) X0 Y1 + (0,-0.5) Y0 X1", ParameterId::new(0))
//!     .unwrap();
//!
//! assert_eq!(fragment.num_qubits(), 2);
//! assert_eq!(fragment.parameters(), vec![ParameterId::new(0)]);
//!
//! // resolve x0 = 0.1
//! let bound = fragment.bind(&[0.1]).unwrap();
//! assert!(bound.parameters().is_empty());
//! ```

pub mod exp_i_theta;
pub mod factory;
pub mod matrices;
pub mod standard;

pub use exp_i_theta::ExpITheta;
pub use factory::InstructionFactory;
pub use standard::{Angle, CNot, Hadamard, RotationX, RotationZ};
