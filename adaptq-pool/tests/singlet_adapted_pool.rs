//! Integration tests for the singlet-adapted UCCSD pool

use adaptq_core::{
    Circuit, Complex64, FermionOperator, Options, ParameterId, PauliOperator, QuantumError,
};
use adaptq_gates::{ExpITheta, InstructionFactory};
use adaptq_pool::pool::anti_hermitian_part;
use adaptq_pool::{OperatorPool, PoolError, ServiceRegistry, SingletAdaptedUccsd, N_ELECTRONS};
use adaptq_transform::{FermionTransform, JordanWigner};
use approx::assert_relative_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn configured(n_electrons: i64) -> SingletAdaptedUccsd {
    let mut pool = SingletAdaptedUccsd::default();
    assert!(pool.optional_parameters(&Options::new().with(N_ELECTRONS, n_electrons)));
    pool
}

#[test]
fn test_h2_pool_size() {
    let mut pool = configured(2);
    let generators = pool.generate(4).unwrap();
    assert_eq!(generators.len(), 3);
    assert_eq!(pool.operators().unwrap().len(), 3);
}

#[test]
fn test_h2_normalization_constants() {
    let mut pool = configured(2);
    pool.generate(4).unwrap();

    // ‖S − S†‖ = 2 for the single and ‖D − D†‖² = 8 for both doubles
    assert_relative_eq!(pool.get_normalization_constant(0).unwrap(), 0.5);
    assert_relative_eq!(
        pool.get_normalization_constant(1).unwrap(),
        1.0 / 8.0f64.sqrt(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        pool.get_normalization_constant(2).unwrap(),
        1.0 / 8.0f64.sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn test_every_generator_is_anti_hermitian_and_normalized() {
    let mut pool = configured(4);
    pool.generate(12).unwrap();

    for op in pool.operators().unwrap() {
        let g = anti_hermitian_part(op);
        assert!(g.approx_eq(&(g.hermitian_conjugate() * -1.0), 1e-12));
        assert_relative_eq!(g.normalized().unwrap().operator_norm(), 1.0, epsilon = 1e-12);
    }
    for generator in pool.pool().unwrap() {
        assert!(generator.is_anti_hermitian(1e-12));
    }
}

#[test]
fn test_pool_is_index_aligned_with_operators() {
    let mut pool = configured(4);
    pool.generate(8).unwrap();

    let operators = pool.operators().unwrap();
    let encoded = pool.pool().unwrap();
    assert_eq!(operators.len(), encoded.len());

    for (op, generator) in operators.iter().zip(encoded) {
        let expected = JordanWigner.transform(&anti_hermitian_part(op).normalized().unwrap());
        assert!(generator.approx_eq(&expected, 1e-12));
    }
}

#[test]
fn test_accessors_before_generate() {
    let pool = configured(2);
    assert!(matches!(
        pool.get_normalization_constant(0),
        Err(PoolError::NotGenerated)
    ));
    assert!(matches!(pool.operator_string(0), Err(PoolError::NotGenerated)));
    assert!(matches!(
        pool.get_operator_instructions(0, 0),
        Err(PoolError::NotGenerated)
    ));
}

#[test]
fn test_optional_parameters_contract() {
    let mut pool = SingletAdaptedUccsd::default();
    assert!(pool.is_number_of_particles_required());
    assert!(!pool.optional_parameters(&Options::new()));
    assert!(!pool.optional_parameters(&Options::new().with(N_ELECTRONS, "2")));
    assert!(!pool.optional_parameters(&Options::new().with(N_ELECTRONS, -1)));
    assert!(pool.generate(4).is_err());

    // unrelated keys are ignored
    let options = Options::new().with(N_ELECTRONS, 2).with("threshold", 1e-3);
    assert!(pool.optional_parameters(&options));
    assert_eq!(pool.n_electrons(), Some(2));
}

#[test]
fn test_rejected_reconfiguration_blocks_generate() {
    let mut pool = configured(2);
    assert!(!pool.optional_parameters(&Options::new().with(N_ELECTRONS, "four")));
    assert_eq!(pool.n_electrons(), None);
    assert!(matches!(
        pool.generate(4),
        Err(PoolError::MissingOption { option: "n-electrons", .. })
    ));
}

#[test]
fn test_options_from_json() {
    let mut pool = SingletAdaptedUccsd::default();
    let options = Options::from_json(r#"{"n-electrons": 2}"#).unwrap();
    assert!(pool.optional_parameters(&options));
    assert_eq!(pool.generate(4).unwrap().len(), 3);
}

#[test]
fn test_operator_string_round_trips() {
    let mut pool = configured(2);
    pool.generate(4).unwrap();

    for index in 0..3 {
        let text = pool.operator_string(index).unwrap();
        let parsed: PauliOperator = text.parse().unwrap();
        assert!(parsed.approx_eq(&pool.pool().unwrap()[index], 1e-15));
    }
    assert!(matches!(
        pool.operator_string(3),
        Err(PoolError::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn test_operator_instructions() {
    let mut pool = configured(2);
    pool.generate(4).unwrap();

    let fragment = pool.get_operator_instructions(2, 5).unwrap();
    assert_eq!(fragment.parameters(), vec![ParameterId::new(5)]);
    assert!(!fragment.is_empty());

    let direct = ExpITheta
        .synthesize(&pool.operator_string(2).unwrap(), "x5".parse().unwrap())
        .unwrap();
    assert_eq!(fragment.len(), direct.len());
}

#[test]
fn test_empty_spaces() {
    // no virtual orbitals
    let mut pool = configured(4);
    assert!(pool.generate(4).unwrap().is_empty());
    assert!(matches!(
        pool.get_normalization_constant(0),
        Err(PoolError::IndexOutOfRange { index: 0, len: 0 })
    ));

    // no electrons
    let mut pool = configured(0);
    assert!(pool.generate(6).unwrap().is_empty());
}

#[test]
fn test_invalid_orbital_space() {
    let mut pool = configured(6);
    assert!(matches!(
        pool.generate(4),
        Err(PoolError::InvalidOrbitalSpace { .. })
    ));
    assert!(matches!(
        configured(2).generate(5),
        Err(PoolError::InvalidOrbitalSpace { .. })
    ));
}

#[test]
fn test_regenerate_replaces_pool() {
    let mut pool = configured(2);
    assert_eq!(pool.generate(4).unwrap().len(), 3);
    // 1 occupied, 2 virtual: 2 singles, 3 doubles
    assert_eq!(pool.generate(6).unwrap().len(), 2 + 2 * 3);
    assert_eq!(pool.operators().unwrap().len(), 8);
}

#[test]
fn test_from_registry_requires_services() {
    assert!(SingletAdaptedUccsd::from_registry(&ServiceRegistry::new()).is_err());
    assert!(SingletAdaptedUccsd::from_registry(&ServiceRegistry::with_defaults()).is_ok());
}

/// Counts calls and delegates to Jordan-Wigner
struct CountingTransform {
    calls: AtomicUsize,
}

impl FermionTransform for CountingTransform {
    fn name(&self) -> &str {
        "counting"
    }

    fn transform(&self, op: &FermionOperator) -> PauliOperator {
        self.calls.fetch_add(1, Ordering::SeqCst);
        JordanWigner.transform(op)
    }
}

/// Rejects every generator
struct BrokenFactory;

impl InstructionFactory for BrokenFactory {
    fn name(&self) -> &str {
        "broken"
    }

    fn synthesize(&self, generator: &str, _param: ParameterId) -> adaptq_core::Result<Circuit> {
        Err(QuantumError::parse(generator, "unsupported"))
    }
}

#[test]
fn test_injected_services() {
    let transform = Arc::new(CountingTransform {
        calls: AtomicUsize::new(0),
    });
    let mut pool = SingletAdaptedUccsd::new(transform.clone(), Arc::new(BrokenFactory));
    pool.configure(&Options::new().with(N_ELECTRONS, 2)).unwrap();
    pool.generate(4).unwrap();

    assert_eq!(transform.calls.load(Ordering::SeqCst), 3);
    assert!(matches!(
        pool.get_operator_instructions(0, 0),
        Err(PoolError::Quantum(QuantumError::ParseError { .. }))
    ));
}

#[test]
fn test_large_pool_uses_parallel_path_consistently() {
    // 3 occupied, 5 virtual: 6 x 15 = 90 doubles, 180 double operators
    let mut pool = configured(6);
    let generators = pool.generate(16).unwrap().to_vec();
    assert_eq!(generators.len(), 15 + 180);

    let again = configured(6).generate(16).unwrap().to_vec();
    for (a, b) in generators.iter().zip(&again) {
        assert!(a.approx_eq(b, 0.0));
    }

    // a spin-adapted single encodes to four strings of weight 1/4
    let g0 = &generators[0];
    let quarter = Complex64::new(0.0, 0.25);
    assert_eq!(g0.len(), 4);
    assert!(g0.terms().all(|(_, c)| (c.norm() - quarter.norm()).abs() < 1e-12));
}
