//! Operator pools for ADAPT-style variational ansatz growth
//!
//! A pool turns an electron count and a qubit count into an ordered list of
//! anti-Hermitian, unit-norm qubit generators, and hands out the circuit
//! fragment for any of them on request.
//!
//! - [`SingletAdaptedUccsd`]: singlet spin-adapted singles and doubles
//! - [`Uccsd`]: spin-orbital singles and doubles
//! - [`ServiceRegistry`]: named encodings and instruction factories
//!
//! # Example
//!
//! ```
//! use adaptq_core::Options;
//! use adaptq_pool::{OperatorPool, ServiceRegistry, SingletAdaptedUccsd};
//!
//! let registry = ServiceRegistry::with_defaults();
//! let mut pool = SingletAdaptedUccsd::from_registry(&registry).unwrap();
//!
//! assert!(pool.optional_parameters(&Options::new().with("n-electrons", 2)));
//! pool.generate(4).unwrap();
//!
//! let fragment = pool.get_operator_instructions(0, 0).unwrap();
//! assert_eq!(fragment.num_qubits(), 4);
//! ```

pub mod error;
pub mod excitations;
pub mod pool;
pub mod services;
pub mod singlet_adapted_uccsd;
pub mod uccsd;

pub use error::PoolError;
pub use excitations::{DoubleExcitation, OrbitalSpace, SingleExcitation};
pub use pool::{OperatorPool, PoolStore, N_ELECTRONS, PARALLEL_THRESHOLD};
pub use services::ServiceRegistry;
pub use singlet_adapted_uccsd::SingletAdaptedUccsd;
pub use uccsd::Uccsd;

/// Type alias for results in adaptq-pool
pub type Result<T> = std::result::Result<T, PoolError>;
