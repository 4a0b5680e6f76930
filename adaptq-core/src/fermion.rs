//! Fermionic operators
//!
//! A [`FermionOperator`] is a weighted sum of products of ladder operators
//! acting on spin-orbitals:
//!
//! ```text
//! O = Σ_k c_k · L_k1 L_k2 ... L_kn      L ∈ { a†_p, a_p }
//! ```
//!
//! Terms are keyed by their literal ladder sequence. No normal ordering is
//! applied, so `a†_1 a_0` and `a_0 a†_1` are distinct terms, and
//! [`FermionOperator::operator_norm`] is the Euclidean norm of the
//! coefficient vector over those keys.

use crate::{QuantumError, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Coefficients with a modulus at or below this value are dropped
pub const COEFFICIENT_TOLERANCE: f64 = 1e-12;

/// Creation or annihilation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LadderKind {
    Annihilation,
    Creation,
}

/// One ladder operator on a spin-orbital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ladder {
    pub index: usize,
    pub kind: LadderKind,
}

impl Ladder {
    /// `a†_index`
    pub const fn creation(index: usize) -> Self {
        Self {
            index,
            kind: LadderKind::Creation,
        }
    }

    /// `a_index`
    pub const fn annihilation(index: usize) -> Self {
        Self {
            index,
            kind: LadderKind::Annihilation,
        }
    }

    #[inline]
    pub fn is_creation(&self) -> bool {
        self.kind == LadderKind::Creation
    }

    /// The Hermitian adjoint: creation ↔ annihilation on the same orbital
    pub fn adjoint(self) -> Self {
        let kind = match self.kind {
            LadderKind::Creation => LadderKind::Annihilation,
            LadderKind::Annihilation => LadderKind::Creation,
        };
        Self { index: self.index, kind }
    }
}

/// `(index, is_creation)` pairs, the usual shorthand for ladder sequences
impl From<(usize, bool)> for Ladder {
    fn from((index, creation): (usize, bool)) -> Self {
        if creation {
            Ladder::creation(index)
        } else {
            Ladder::annihilation(index)
        }
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_creation() {
            write!(f, "{}^", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// Ordered ladder sequence of one term; doubles fit inline
pub type LadderString = SmallVec<[Ladder; 4]>;

/// Weighted sum of ladder-operator products
///
/// Every arithmetic operation produces a new value; stored operators are
/// never changed behind the caller's back.
///
/// # Example
/// ```
/// use adaptq_core::FermionOperator;
///
/// // a†_2 a_0 + a†_3 a_1
/// let mut op = FermionOperator::term([(2, true), (0, false)], 1.0);
/// op += FermionOperator::term([(3, true), (1, false)], 1.0);
///
/// let generator = op.clone() - op.hermitian_conjugate();
/// assert!(generator.is_anti_hermitian(1e-12));
/// assert_eq!(generator.len(), 4);
/// assert!((generator.operator_norm() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FermionOperator {
    terms: BTreeMap<LadderString, Complex64>,
}

impl FermionOperator {
    /// The zero operator
    pub fn zero() -> Self {
        Self::default()
    }

    /// The identity scaled by `coeff` (empty ladder sequence)
    pub fn identity(coeff: impl Into<Complex64>) -> Self {
        Self::term(std::iter::empty::<Ladder>(), coeff)
    }

    /// A single-term operator
    pub fn term<L, I>(ladders: I, coeff: impl Into<Complex64>) -> Self
    where
        L: Into<Ladder>,
        I: IntoIterator<Item = L>,
    {
        let mut op = Self::zero();
        op.add_term(ladders, coeff);
        op
    }

    /// Add `coeff · ladders` in place, merging with an existing identical term
    pub fn add_term<L, I>(&mut self, ladders: I, coeff: impl Into<Complex64>)
    where
        L: Into<Ladder>,
        I: IntoIterator<Item = L>,
    {
        let key: LadderString = ladders.into_iter().map(Into::into).collect();
        self.accumulate(key, coeff.into());
    }

    fn accumulate(&mut self, key: LadderString, coeff: Complex64) {
        match self.terms.entry(key) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coeff;
                if entry.get().norm() <= COEFFICIENT_TOLERANCE {
                    entry.remove();
                }
            }
            Entry::Vacant(entry) => {
                if coeff.norm() > COEFFICIENT_TOLERANCE {
                    entry.insert(coeff);
                }
            }
        }
    }

    /// Number of stored terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(ladders, coefficient)` in key order
    pub fn terms(&self) -> impl Iterator<Item = (&[Ladder], Complex64)> + '_ {
        self.terms.iter().map(|(k, c)| (k.as_slice(), *c))
    }

    /// Coefficient of the term with exactly this ladder sequence
    pub fn coefficient(&self, ladders: &[Ladder]) -> Option<Complex64> {
        self.terms.get(ladders).copied()
    }

    /// Highest spin-orbital index referenced, if any
    pub fn max_index(&self) -> Option<usize> {
        self.terms
            .keys()
            .flat_map(|k| k.iter().map(|l| l.index))
            .max()
    }

    /// Hermitian conjugate: reverse each product, adjoint every ladder and
    /// conjugate the coefficient
    pub fn hermitian_conjugate(&self) -> Self {
        let mut out = Self::zero();
        for (key, coeff) in &self.terms {
            let adjoint: LadderString = key.iter().rev().map(|l| l.adjoint()).collect();
            out.accumulate(adjoint, coeff.conj());
        }
        out
    }

    /// `√Σ|c_k|²` over the stored terms
    pub fn operator_norm(&self) -> f64 {
        self.terms
            .values()
            .map(|c| c.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Divide every coefficient by [`Self::operator_norm`]
    ///
    /// # Errors
    /// Returns [`QuantumError::ZeroNorm`] if the operator vanishes.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.operator_norm();
        if norm <= COEFFICIENT_TOLERANCE {
            return Err(QuantumError::ZeroNorm);
        }
        for coeff in self.terms.values_mut() {
            *coeff /= norm;
        }
        Ok(())
    }

    /// Normalized copy
    pub fn normalized(&self) -> Result<Self> {
        let mut out = self.clone();
        out.normalize()?;
        Ok(out)
    }

    /// Term-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let zero = Complex64::new(0.0, 0.0);
        let within = |a: &BTreeMap<LadderString, Complex64>, b: &BTreeMap<LadderString, Complex64>| {
            a.iter()
                .all(|(k, c)| (*c - b.get(k).copied().unwrap_or(zero)).norm() <= tolerance)
        };
        within(&self.terms, &other.terms) && within(&other.terms, &self.terms)
    }

    /// Whether `O† = −O` within `tolerance`
    pub fn is_anti_hermitian(&self, tolerance: f64) -> bool {
        self.hermitian_conjugate().approx_eq(&-self.clone(), tolerance)
    }

    /// Whether `O† = O` within `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        self.hermitian_conjugate().approx_eq(self, tolerance)
    }

    fn scaled(mut self, factor: Complex64) -> Self {
        for coeff in self.terms.values_mut() {
            *coeff *= factor;
        }
        self.terms.retain(|_, c| c.norm() > COEFFICIENT_TOLERANCE);
        self
    }
}

impl AddAssign<&FermionOperator> for FermionOperator {
    fn add_assign(&mut self, rhs: &FermionOperator) {
        for (key, coeff) in &rhs.terms {
            self.accumulate(key.clone(), *coeff);
        }
    }
}

impl AddAssign for FermionOperator {
    fn add_assign(&mut self, rhs: FermionOperator) {
        for (key, coeff) in rhs.terms {
            self.accumulate(key, coeff);
        }
    }
}

impl SubAssign<&FermionOperator> for FermionOperator {
    fn sub_assign(&mut self, rhs: &FermionOperator) {
        for (key, coeff) in &rhs.terms {
            self.accumulate(key.clone(), -*coeff);
        }
    }
}

impl SubAssign for FermionOperator {
    fn sub_assign(&mut self, rhs: FermionOperator) {
        for (key, coeff) in rhs.terms {
            self.accumulate(key, -coeff);
        }
    }
}

impl Add for FermionOperator {
    type Output = FermionOperator;

    fn add(mut self, rhs: FermionOperator) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub for FermionOperator {
    type Output = FermionOperator;

    fn sub(mut self, rhs: FermionOperator) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Add for &FermionOperator {
    type Output = FermionOperator;

    fn add(self, rhs: &FermionOperator) -> Self::Output {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub for &FermionOperator {
    type Output = FermionOperator;

    fn sub(self, rhs: &FermionOperator) -> Self::Output {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Neg for FermionOperator {
    type Output = FermionOperator;

    fn neg(self) -> Self::Output {
        self.scaled(Complex64::new(-1.0, 0.0))
    }
}

impl Mul<f64> for FermionOperator {
    type Output = FermionOperator;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(Complex64::new(rhs, 0.0))
    }
}

impl Mul<Complex64> for FermionOperator {
    type Output = FermionOperator;

    fn mul(self, rhs: Complex64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl std::iter::Sum for FermionOperator {
    fn sum<I: Iterator<Item = FermionOperator>>(iter: I) -> Self {
        iter.fold(FermionOperator::zero(), |acc, op| acc + op)
    }
}

impl fmt::Display for FermionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (key, coeff)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({},{})", coeff.re + 0.0, coeff.im + 0.0)?;
            for ladder in key {
                write!(f, " {}", ladder)?;
            }
        }
        Ok(())
    }
}
