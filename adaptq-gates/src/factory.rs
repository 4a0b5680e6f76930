//! Instruction factories: named builders of parameterized circuit fragments

use adaptq_core::{Circuit, ParameterId, Result};

/// Builds the circuit fragment for a generator given in text form
///
/// Implementations are stateless and shared between pools behind an `Arc`.
pub trait InstructionFactory: Send + Sync {
    /// Name the factory is registered under (e.g. "exp_i_theta")
    fn name(&self) -> &str;

    /// Synthesize the fragment for `generator`, symbolic in `param`
    fn synthesize(&self, generator: &str, param: ParameterId) -> Result<Circuit>;
}
