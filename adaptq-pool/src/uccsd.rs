//! Spin-orbital UCCSD operator pool
//!
//! Unlike the singlet-adapted pool, every spin-conserving excitation is its
//! own pool entry: singles `a†_r a_p` and doubles `a†_r a_p a†_s a_q`.

use crate::excitations::OrbitalSpace;
use crate::pool::{n_electrons_option, OperatorPool, PoolStore, N_ELECTRONS};
use crate::services::ServiceRegistry;
use crate::{PoolError, Result};
use adaptq_core::{Circuit, FermionOperator, Ladder, Options, PauliOperator};
use adaptq_gates::{ExpITheta, InstructionFactory};
use adaptq_transform::{FermionTransform, JordanWigner};
use std::sync::Arc;
use tracing::debug;

/// Raw operator set: spin-orbital singles, then doubles
pub fn build_operators(space: &OrbitalSpace) -> Vec<FermionOperator> {
    let singles = space.spin_orbital_singles();
    let doubles = space.spin_orbital_doubles();

    let mut operators = Vec::with_capacity(singles.len() + doubles.len());
    for s in &singles {
        operators.push(FermionOperator::term(
            [Ladder::creation(s.a), Ladder::annihilation(s.i)],
            1.0,
        ));
    }
    for d in &doubles {
        operators.push(FermionOperator::term(
            [
                Ladder::creation(d.a),
                Ladder::annihilation(d.i),
                Ladder::creation(d.b),
                Ladder::annihilation(d.j),
            ],
            1.0,
        ));
    }

    debug!(
        singles = singles.len(),
        doubles = doubles.len(),
        "built spin-orbital excitation operators"
    );
    operators
}

/// Spin-orbital UCCSD pool, registered as "uccsd"
pub struct Uccsd {
    transform: Arc<dyn FermionTransform>,
    factory: Arc<dyn InstructionFactory>,
    n_electrons: Option<usize>,
    store: PoolStore,
}

impl Uccsd {
    pub const NAME: &'static str = "uccsd";

    pub fn new(transform: Arc<dyn FermionTransform>, factory: Arc<dyn InstructionFactory>) -> Self {
        Self {
            transform,
            factory,
            n_electrons: None,
            store: PoolStore::new(),
        }
    }

    pub fn from_registry(registry: &ServiceRegistry) -> Result<Self> {
        Ok(Self::new(
            registry.transform(JordanWigner::NAME)?,
            registry.factory(ExpITheta::NAME)?,
        ))
    }
}

impl Default for Uccsd {
    fn default() -> Self {
        Self::new(Arc::new(JordanWigner), Arc::new(ExpITheta))
    }
}

impl OperatorPool for Uccsd {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Spin-conserving spin-orbital singles and doubles"
    }

    fn is_number_of_particles_required(&self) -> bool {
        true
    }

    fn configure(&mut self, options: &Options) -> Result<()> {
        self.n_electrons = None;
        self.n_electrons = Some(n_electrons_option(Self::NAME, options)?);
        Ok(())
    }

    fn generate(&mut self, n_qubits: usize) -> Result<&[PauliOperator]> {
        self.store.clear();
        let n_electrons = self.n_electrons.ok_or(PoolError::MissingOption {
            pool: Self::NAME,
            option: N_ELECTRONS,
        })?;
        let space = OrbitalSpace::new(n_electrons, n_qubits)?;
        let operators = build_operators(&space);
        self.store.populate(operators, self.transform.as_ref())
    }

    fn operators(&self) -> Result<&[FermionOperator]> {
        self.store.operators()
    }

    fn pool(&self) -> Result<&[PauliOperator]> {
        self.store.pool()
    }

    fn operator_string(&self, index: usize) -> Result<String> {
        self.store.operator_string(index)
    }

    fn get_normalization_constant(&self, index: usize) -> Result<f64> {
        self.store.normalization_constant(index)
    }

    fn get_operator_instructions(&self, op_index: usize, param_index: usize) -> Result<Circuit> {
        self.store
            .instructions(self.factory.as_ref(), op_index, param_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_h2_operators() {
        let space = OrbitalSpace::new(2, 4).unwrap();
        let ops = build_operators(&space);
        let text: Vec<String> = ops.iter().map(|op| op.to_string()).collect();
        assert_eq!(
            text,
            vec!["(1,0) 1^ 0", "(1,0) 3^ 2", "(1,0) 1^ 0 3^ 2"]
        );
    }

    #[test]
    fn test_generate_h2() {
        let mut pool = Uccsd::default();
        assert!(pool.optional_parameters(&Options::new().with(N_ELECTRONS, 2)));
        let generators = pool.generate(4).unwrap();
        assert_eq!(generators.len(), 3);
        assert!(generators.iter().all(|g| g.is_anti_hermitian(1e-12)));

        // single excitations have one term each side of the conjugate
        assert_relative_eq!(
            pool.get_normalization_constant(0).unwrap(),
            1.0 / 2.0f64.sqrt()
        );
    }

    #[test]
    fn test_count_scales_with_space() {
        let mut pool = Uccsd::default();
        pool.configure(&Options::new().with(N_ELECTRONS, 4)).unwrap();
        // 2 occupied, 2 virtual spatial orbitals: 8 singles, 18 doubles
        assert_eq!(pool.generate(8).unwrap().len(), 26);
    }

    #[test]
    fn test_rejects_mistyped_electrons() {
        let mut pool = Uccsd::default();
        assert!(!pool.optional_parameters(&Options::new().with(N_ELECTRONS, "two")));
        assert!(pool.generate(4).is_err());
    }

    #[test]
    fn test_reconfiguration_clears_electron_count() {
        let mut pool = Uccsd::default();
        assert!(pool.optional_parameters(&Options::new().with(N_ELECTRONS, 2)));
        assert!(!pool.optional_parameters(&Options::new()));
        assert!(matches!(pool.generate(4), Err(PoolError::MissingOption { .. })));
    }
}
