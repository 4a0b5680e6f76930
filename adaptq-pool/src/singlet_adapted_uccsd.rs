//! Singlet spin-adapted UCCSD operator pool
//!
//! Every spatial single `(i, a)` yields one operator summing the alpha and
//! beta excitations. Every spatial double `(i, j, a, b)` yields two
//! operators, the two singlet couplings of the four spin channels:
//!
//! ```text
//! A = 2/√3 (a†aα iα a†bα jα + a†aβ iβ a†bβ jβ)
//!   + 1/√3 (a†aα iα a†bβ jβ + a†aβ iβ a†bα jα + a†aα iβ a†bβ jα + a†aβ iα a†bα jβ)
//! B =      a†aα iα a†bβ jβ + a†aβ iβ a†bα jα − a†aα iβ a†bβ jα − a†aβ iα a†bα jβ
//! ```
//!
//! Operators are stored A then B for each double, after all singles.

use crate::excitations::{DoubleExcitation, OrbitalSpace, SingleExcitation};
use crate::pool::{n_electrons_option, OperatorPool, PoolStore, PARALLEL_THRESHOLD};
use crate::services::ServiceRegistry;
use crate::{PoolError, Result};
use adaptq_core::{Circuit, FermionOperator, Ladder, Options, PauliOperator};
use adaptq_gates::{ExpITheta, InstructionFactory};
use adaptq_transform::{FermionTransform, JordanWigner};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

const FRAC_1_SQRT_3: f64 = 0.5773502691896257; // 1/√3
const FRAC_2_SQRT_3: f64 = 1.1547005383792515; // 2/√3

/// `a†_a a_i a†_b a_j` on spin-orbitals
fn double_term(a: usize, i: usize, b: usize, j: usize) -> [Ladder; 4] {
    [
        Ladder::creation(a),
        Ladder::annihilation(i),
        Ladder::creation(b),
        Ladder::annihilation(j),
    ]
}

/// Alpha/beta spin-orbitals of the four orbitals of a spatial double
struct SpinChannels {
    ia: usize,
    ib: usize,
    ja: usize,
    jb: usize,
    aa: usize,
    ab: usize,
    ba: usize,
    bb: usize,
}

impl SpinChannels {
    fn new(space: &OrbitalSpace, d: &DoubleExcitation) -> Self {
        let a = space.virtual_orbital(d.a);
        let b = space.virtual_orbital(d.b);
        Self {
            ia: space.alpha(d.i),
            ib: space.beta(d.i),
            ja: space.alpha(d.j),
            jb: space.beta(d.j),
            aa: space.alpha(a),
            ab: space.beta(a),
            ba: space.alpha(b),
            bb: space.beta(b),
        }
    }
}

/// Spin-adapted single: alpha plus beta excitation
pub fn single_operator(space: &OrbitalSpace, s: &SingleExcitation) -> FermionOperator {
    let a = space.virtual_orbital(s.a);
    let mut op = FermionOperator::term(
        [
            Ladder::creation(space.alpha(a)),
            Ladder::annihilation(space.alpha(s.i)),
        ],
        1.0,
    );
    op.add_term(
        [
            Ladder::creation(space.beta(a)),
            Ladder::annihilation(space.beta(s.i)),
        ],
        1.0,
    );
    op
}

/// The two singlet-coupled operators `[A, B]` of a spatial double
pub fn double_operators(space: &OrbitalSpace, d: &DoubleExcitation) -> [FermionOperator; 2] {
    let SpinChannels {
        ia,
        ib,
        ja,
        jb,
        aa,
        ab,
        ba,
        bb,
    } = SpinChannels::new(space, d);

    let mut first = FermionOperator::zero();
    first.add_term(double_term(aa, ia, ba, ja), FRAC_2_SQRT_3);
    first.add_term(double_term(ab, ib, bb, jb), FRAC_2_SQRT_3);
    first.add_term(double_term(aa, ia, bb, jb), FRAC_1_SQRT_3);
    first.add_term(double_term(ab, ib, ba, ja), FRAC_1_SQRT_3);
    first.add_term(double_term(aa, ib, bb, ja), FRAC_1_SQRT_3);
    first.add_term(double_term(ab, ia, ba, jb), FRAC_1_SQRT_3);

    let mut second = FermionOperator::zero();
    second.add_term(double_term(aa, ia, bb, jb), 1.0);
    second.add_term(double_term(ab, ib, ba, ja), 1.0);
    second.add_term(double_term(aa, ib, bb, ja), -1.0);
    second.add_term(double_term(ab, ia, ba, jb), -1.0);

    [first, second]
}

/// Raw operator set: singles, then A/B pairs per double
pub fn build_operators(space: &OrbitalSpace) -> Vec<FermionOperator> {
    let singles = space.singles();
    let doubles = space.doubles();

    let mut operators = Vec::with_capacity(singles.len() + 2 * doubles.len());
    operators.extend(singles.iter().map(|s| single_operator(space, s)));

    let pairs: Vec<[FermionOperator; 2]> = if doubles.len() >= PARALLEL_THRESHOLD {
        doubles.par_iter().map(|d| double_operators(space, d)).collect()
    } else {
        doubles.iter().map(|d| double_operators(space, d)).collect()
    };
    operators.extend(pairs.into_iter().flatten());

    debug!(
        n_occupied = space.n_occupied(),
        n_virtual = space.n_virtual(),
        singles = singles.len(),
        doubles = doubles.len(),
        operators = operators.len(),
        "built singlet-adapted excitation operators"
    );
    operators
}

/// Singlet spin-adapted UCCSD pool, registered as "singlet-adapted-uccsd"
///
/// # Example
/// ```
/// use adaptq_core::Options;
/// use adaptq_pool::{OperatorPool, SingletAdaptedUccsd};
///
/// let mut pool = SingletAdaptedUccsd::default();
/// assert!(pool.optional_parameters(&Options::new().with("n-electrons", 2)));
///
/// let generators = pool.generate(4).unwrap();
/// assert_eq!(generators.len(), 3);
/// ```
pub struct SingletAdaptedUccsd {
    transform: Arc<dyn FermionTransform>,
    factory: Arc<dyn InstructionFactory>,
    n_electrons: Option<usize>,
    store: PoolStore,
}

impl SingletAdaptedUccsd {
    pub const NAME: &'static str = "singlet-adapted-uccsd";

    /// Pool using the given encoding and instruction factory
    pub fn new(transform: Arc<dyn FermionTransform>, factory: Arc<dyn InstructionFactory>) -> Self {
        Self {
            transform,
            factory,
            n_electrons: None,
            store: PoolStore::new(),
        }
    }

    /// Pool wired to the registry's "jw" and "exp_i_theta" services
    pub fn from_registry(registry: &ServiceRegistry) -> Result<Self> {
        Ok(Self::new(
            registry.transform(JordanWigner::NAME)?,
            registry.factory(ExpITheta::NAME)?,
        ))
    }

    pub fn n_electrons(&self) -> Option<usize> {
        self.n_electrons
    }
}

impl Default for SingletAdaptedUccsd {
    fn default() -> Self {
        Self::new(Arc::new(JordanWigner), Arc::new(ExpITheta))
    }
}

impl OperatorPool for SingletAdaptedUccsd {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Singlet spin-adapted singles and doubles"
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
            option: crate::pool::N_ELECTRONS,
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
