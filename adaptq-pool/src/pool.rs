//! The operator-pool capability and the generated-pool store shared by all
//! pool variants

use crate::{PoolError, Result};
use adaptq_core::{
    Circuit, FermionOperator, Options, ParameterId, PauliOperator, COEFFICIENT_TOLERANCE,
};
use adaptq_gates::InstructionFactory;
use adaptq_transform::FermionTransform;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Minimum number of operators before pool stages run under rayon
pub const PARALLEL_THRESHOLD: usize = 32;

/// Name of the electron-count option
pub const N_ELECTRONS: &str = "n-electrons";

/// A family of candidate generators for adaptive ansatz growth
///
/// Pools are configured with [`OperatorPool::optional_parameters`], filled
/// once by [`OperatorPool::generate`] and then read by index. Every
/// index-based accessor fails with [`PoolError::NotGenerated`] until
/// `generate` has succeeded.
pub trait OperatorPool: Send + Sync {
    /// Stable identifier, e.g. "singlet-adapted-uccsd"
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Whether the pool needs the electron count before generation
    fn is_number_of_particles_required(&self) -> bool;

    /// Apply options, reporting problems as errors
    fn configure(&mut self, options: &Options) -> Result<()>;

    /// Apply options; `false` if a required option is missing or mistyped
    fn optional_parameters(&mut self, options: &Options) -> bool {
        match self.configure(options) {
            Ok(()) => true,
            Err(err) => {
                info!(pool = self.name(), %err, "operator pool options rejected");
                false
            }
        }
    }

    /// Build the pool for `n_qubits` spin-orbitals
    ///
    /// Calling `generate` again discards the previous pool.
    fn generate(&mut self, n_qubits: usize) -> Result<&[PauliOperator]>;

    /// Raw excitation operators, index-aligned with [`OperatorPool::pool`]
    fn operators(&self) -> Result<&[FermionOperator]>;

    /// Encoded, anti-Hermitian, unit-norm generators
    fn pool(&self) -> Result<&[PauliOperator]>;

    /// Text form of `pool[index]`
    fn operator_string(&self, index: usize) -> Result<String>;

    /// `1 / ‖A − A†‖` for the raw operator `A = operators[index]`
    fn get_normalization_constant(&self, index: usize) -> Result<f64>;

    /// Circuit fragment for `exp(θ · pool[op_index])` with θ = `x<param_index>`
    fn get_operator_instructions(&self, op_index: usize, param_index: usize) -> Result<Circuit>;
}

/// Read the electron count from `options`
///
/// # Errors
/// [`PoolError::MissingOption`] when absent, [`PoolError::InvalidOption`]
/// when not a non-negative integer.
pub fn n_electrons_option(pool: &'static str, options: &Options) -> Result<usize> {
    let value = options.get(N_ELECTRONS).ok_or(PoolError::MissingOption {
        pool,
        option: N_ELECTRONS,
    })?;
    let n = options.get_int(N_ELECTRONS).ok_or_else(|| {
        PoolError::invalid_option(
            N_ELECTRONS,
            format!("expected an integer, found {}", value.type_name()),
        )
    })?;
    usize::try_from(n)
        .map_err(|_| PoolError::invalid_option(N_ELECTRONS, format!("{} is negative", n)))
}

/// `g = a − a†`
pub fn anti_hermitian_part(op: &FermionOperator) -> FermionOperator {
    op - &op.hermitian_conjugate()
}

/// Operator set and encoded pool of one pool instance
///
/// Both sequences are populated together and stay index-aligned: `pool[i]`
/// is the encoding of the normalized anti-Hermitian part of `operators[i]`.
#[derive(Debug, Clone, Default)]
pub struct PoolStore {
    operators: Vec<FermionOperator>,
    pool: Vec<PauliOperator>,
    generated: bool,
}

impl PoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `operators` and their encoded generators
    ///
    /// On error the store is left empty and ungenerated.
    ///
    /// # Errors
    /// Returns [`PoolError::DegenerateGenerator`] if an operator equals its
    /// own Hermitian conjugate.
    pub fn populate(
        &mut self,
        operators: Vec<FermionOperator>,
        transform: &dyn FermionTransform,
    ) -> Result<&[PauliOperator]> {
        self.clear();

        let encode = |(index, op): (usize, &FermionOperator)| -> Result<PauliOperator> {
            let mut generator = anti_hermitian_part(op);
            generator
                .normalize()
                .map_err(|_| PoolError::DegenerateGenerator { index })?;
            let encoded = transform.transform(&generator);
            if encoded.is_empty() {
                warn!(
                    index,
                    transform = transform.name(),
                    "encoded generator is the zero operator"
                );
            }
            Ok(encoded)
        };

        let pool = if operators.len() >= PARALLEL_THRESHOLD {
            operators
                .par_iter()
                .enumerate()
                .map(encode)
                .collect::<Result<Vec<_>>>()?
        } else {
            operators
                .iter()
                .enumerate()
                .map(encode)
                .collect::<Result<Vec<_>>>()?
        };

        debug!(
            operators = operators.len(),
            transform = transform.name(),
            "operator pool encoded"
        );

        self.operators = operators;
        self.pool = pool;
        self.generated = true;
        Ok(&self.pool)
    }

    pub fn clear(&mut self) {
        self.operators.clear();
        self.pool.clear();
        self.generated = false;
    }

    #[inline]
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn operators(&self) -> Result<&[FermionOperator]> {
        self.ensure_generated()?;
        Ok(&self.operators)
    }

    pub fn pool(&self) -> Result<&[PauliOperator]> {
        self.ensure_generated()?;
        Ok(&self.pool)
    }

    pub fn operator_string(&self, index: usize) -> Result<String> {
        Ok(self.encoded(index)?.to_string())
    }

    /// Recomputed from the raw operator on every call
    pub fn normalization_constant(&self, index: usize) -> Result<f64> {
        self.ensure_generated()?;
        let op = self.operators.get(index).ok_or(PoolError::IndexOutOfRange {
            index,
            len: self.operators.len(),
        })?;
        let norm = anti_hermitian_part(op).operator_norm();
        if norm <= COEFFICIENT_TOLERANCE {
            return Err(PoolError::DegenerateGenerator { index });
        }
        Ok(1.0 / norm)
    }

    pub fn instructions(
        &self,
        factory: &dyn InstructionFactory,
        op_index: usize,
        param_index: usize,
    ) -> Result<Circuit> {
        let generator = self.encoded(op_index)?.to_string();
        let circuit = factory.synthesize(&generator, ParameterId::new(param_index))?;
        Ok(circuit)
    }

    fn encoded(&self, index: usize) -> Result<&PauliOperator> {
        self.ensure_generated()?;
        self.pool.get(index).ok_or(PoolError::IndexOutOfRange {
            index,
            len: self.pool.len(),
        })
    }

    fn ensure_generated(&self) -> Result<()> {
        if self.generated {
            Ok(())
        } else {
            Err(PoolError::NotGenerated)
        }
    }
}
