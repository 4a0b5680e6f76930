//! Jordan-Wigner transformation
//!
//! Spin-orbital `p` is mapped to qubit `p`:
//!
//! ```text
//! a†_p ↦ ½ (X_p − iY_p) Z_0 ⋯ Z_{p−1}
//! a_p  ↦ ½ (X_p + iY_p) Z_0 ⋯ Z_{p−1}
//! ```
//!
//! A term `c · l₁ l₂ ⋯ lₖ` is encoded as the ordered product of the ladder
//! images, so terms that are not normal ordered are encoded exactly as
//! written.

use crate::transform::FermionTransform;
use adaptq_core::{FermionOperator, Ladder, Pauli, PauliOperator, PauliString};
use ahash::AHashMap;
use num_complex::Complex64;
use tracing::trace;

/// The Jordan-Wigner encoding, registered as "jw"
#[derive(Debug, Clone, Copy, Default)]
pub struct JordanWigner;

impl JordanWigner {
    pub const NAME: &'static str = "jw";

    pub fn new() -> Self {
        Self
    }

    /// Image of a single ladder operator
    pub fn ladder_image(ladder: Ladder) -> PauliOperator {
        let parity = (0..ladder.index).map(|q| (q, Pauli::Z));

        let x = PauliString::from_ops(parity.clone().chain([(ladder.index, Pauli::X)]));
        let y = PauliString::from_ops(parity.chain([(ladder.index, Pauli::Y)]));

        let y_coeff = if ladder.is_creation() {
            Complex64::new(0.0, -0.5)
        } else {
            Complex64::new(0.0, 0.5)
        };

        let mut image = PauliOperator::zero();
        // qubit indices are distinct by construction
        if let (Ok(x), Ok(y)) = (x, y) {
            image.add_term(x, 0.5);
            image.add_term(y, y_coeff);
        }
        image
    }
}

impl FermionTransform for JordanWigner {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn transform(&self, op: &FermionOperator) -> PauliOperator {
        // ladder images repeat heavily across the terms of one operator
        let mut cache: AHashMap<Ladder, PauliOperator> = AHashMap::new();
        let mut result = PauliOperator::zero();

        for (ladders, coeff) in op.terms() {
            let mut acc = PauliOperator::identity(coeff);
            for &ladder in ladders {
                let image = cache
                    .entry(ladder)
                    .or_insert_with(|| Self::ladder_image(ladder));
                acc = &acc * &*image;
            }
            result += acc;
        }

        trace!(
            fermion_terms = op.len(),
            pauli_terms = result.len(),
            cached_ladders = cache.len(),
            "jordan-wigner transform"
        );
        result
    }
}
