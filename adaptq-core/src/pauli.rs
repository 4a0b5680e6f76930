//! Qubit operators as weighted sums of Pauli strings
//!
//! # Pauli Strings
//!
//! A Pauli string is stored sparsely as the ordered list of its non-identity
//! factors, e.g. `X0 Z1 Y3` for X⊗Z⊗I⊗Y. The empty string is the identity.
//!
//! # Text form
//!
//! ```text
//! (0.5,0) X0 Y1 + (-0.5,0) Y0 X1 + (0.25,0) I
//! ```
//!
//! Each term is a parenthesised `(re,im)` coefficient followed by its
//! factors. The same form is accepted by [`PauliOperator::from_str`].

use crate::fermion::COEFFICIENT_TOLERANCE;
use crate::{QuantumError, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

/// Non-identity single-qubit Pauli operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pauli {
    /// Pauli X (bit flip)
    X,
    /// Pauli Y
    Y,
    /// Pauli Z (phase flip)
    Z,
}

impl Pauli {
    /// Parse from a character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Product `self · other` as `(phase, result)`; `None` is the identity
    pub fn multiply(self, other: Pauli) -> (Complex64, Option<Pauli>) {
        use Pauli::*;
        match (self, other) {
            (X, X) | (Y, Y) | (Z, Z) => (ONE, None),
            (X, Y) => (I, Some(Z)),
            (Y, X) => (NEG_I, Some(Z)),
            (Y, Z) => (I, Some(X)),
            (Z, Y) => (NEG_I, Some(X)),
            (Z, X) => (I, Some(Y)),
            (X, Z) => (NEG_I, Some(Y)),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Tensor product of Pauli factors on distinct qubits, sorted by qubit
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PauliString {
    ops: SmallVec<[(usize, Pauli); 4]>,
}

impl PauliString {
    /// The identity string
    pub fn identity() -> Self {
        Self::default()
    }

    /// A single factor on `qubit`
    pub fn single(qubit: usize, pauli: Pauli) -> Self {
        let mut ops = SmallVec::new();
        ops.push((qubit, pauli));
        Self { ops }
    }

    /// Build from `(qubit, pauli)` factors in any order
    ///
    /// # Errors
    /// Returns [`QuantumError::DuplicateQubit`] if a qubit appears twice.
    pub fn from_ops(factors: impl IntoIterator<Item = (usize, Pauli)>) -> Result<Self> {
        let mut ops: SmallVec<[(usize, Pauli); 4]> = factors.into_iter().collect();
        ops.sort_unstable_by_key(|(q, _)| *q);
        if let Some(w) = ops.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(QuantumError::DuplicateQubit(w[0].0.into()));
        }
        Ok(Self { ops })
    }

    /// Non-identity factors in qubit order
    pub fn ops(&self) -> &[(usize, Pauli)] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of non-identity factors
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// Factor acting on `qubit`, `None` for identity
    pub fn get(&self, qubit: usize) -> Option<Pauli> {
        self.ops
            .binary_search_by_key(&qubit, |(q, _)| *q)
            .ok()
            .map(|i| self.ops[i].1)
    }

    pub fn max_qubit(&self) -> Option<usize> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Product `self · other` as `(phase, string)`
    pub fn multiply(&self, other: &PauliString) -> (Complex64, PauliString) {
        let mut phase = ONE;
        let mut ops = SmallVec::with_capacity(self.ops.len() + other.ops.len());
        let (mut i, mut j) = (0, 0);
        while i < self.ops.len() && j < other.ops.len() {
            let (qa, pa) = self.ops[i];
            let (qb, pb) = other.ops[j];
            if qa < qb {
                ops.push((qa, pa));
                i += 1;
            } else if qb < qa {
                ops.push((qb, pb));
                j += 1;
            } else {
                let (ph, p) = pa.multiply(pb);
                phase *= ph;
                if let Some(p) = p {
                    ops.push((qa, p));
                }
                i += 1;
                j += 1;
            }
        }
        ops.extend_from_slice(&self.ops[i..]);
        ops.extend_from_slice(&other.ops[j..]);
        (phase, PauliString { ops })
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for (i, (q, p)) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", p, q)?;
        }
        Ok(())
    }
}

/// Weighted sum of Pauli strings
///
/// # Example
/// ```
/// use adaptq_core::{Pauli, PauliOperator, PauliString};
/// use num_complex::Complex64;
///
/// let x0 = PauliOperator::term(PauliString::single(0, Pauli::X), 1.0);
/// let y0 = PauliOperator::term(PauliString::single(0, Pauli::Y), 1.0);
///
/// // XY = iZ
/// let product = &x0 * &y0;
/// assert_eq!(product.to_string(), "(0,1) Z0");
///
/// let parsed: PauliOperator = "(0,1) Z0".parse().unwrap();
/// assert!(parsed.approx_eq(&product, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PauliOperator {
    terms: BTreeMap<PauliString, Complex64>,
}

impl PauliOperator {
    /// The zero operator
    pub fn zero() -> Self {
        Self::default()
    }

    /// Identity scaled by `coeff`
    pub fn identity(coeff: impl Into<Complex64>) -> Self {
        Self::term(PauliString::identity(), coeff)
    }

    /// A single-term operator
    pub fn term(string: PauliString, coeff: impl Into<Complex64>) -> Self {
        let mut op = Self::zero();
        op.add_term(string, coeff);
        op
    }

    /// Add `coeff · string` in place
    pub fn add_term(&mut self, string: PauliString, coeff: impl Into<Complex64>) {
        let coeff = coeff.into();
        match self.terms.entry(string) {
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

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(string, coefficient)` in string order
    pub fn terms(&self) -> impl Iterator<Item = (&PauliString, Complex64)> + '_ {
        self.terms.iter().map(|(s, c)| (s, *c))
    }

    pub fn coefficient(&self, string: &PauliString) -> Option<Complex64> {
        self.terms.get(string).copied()
    }

    /// Number of qubits the operator touches (highest index + 1)
    pub fn num_qubits(&self) -> usize {
        self.terms
            .keys()
            .filter_map(PauliString::max_qubit)
            .max()
            .map_or(0, |q| q + 1)
    }

    /// Conjugate every coefficient (Pauli strings are Hermitian)
    pub fn hermitian_conjugate(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(s, c)| (s.clone(), c.conj())).collect(),
        }
    }

    /// Whether every coefficient is imaginary within `tolerance`
    pub fn is_anti_hermitian(&self, tolerance: f64) -> bool {
        self.terms.values().all(|c| c.re.abs() <= tolerance)
    }

    /// Whether every coefficient is real within `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        self.terms.values().all(|c| c.im.abs() <= tolerance)
    }

    /// Drop terms whose coefficient modulus is at most `tolerance`
    pub fn simplify(&mut self, tolerance: f64) {
        self.terms.retain(|_, c| c.norm() > tolerance);
    }

    /// Term-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let zero = Complex64::new(0.0, 0.0);
        let within = |a: &BTreeMap<PauliString, Complex64>, b: &BTreeMap<PauliString, Complex64>| {
            a.iter()
                .all(|(k, c)| (*c - b.get(k).copied().unwrap_or(zero)).norm() <= tolerance)
        };
        within(&self.terms, &other.terms) && within(&other.terms, &self.terms)
    }

    fn scaled(mut self, factor: Complex64) -> Self {
        for coeff in self.terms.values_mut() {
            *coeff *= factor;
        }
        self.simplify(COEFFICIENT_TOLERANCE);
        self
    }
}

impl AddAssign<&PauliOperator> for PauliOperator {
    fn add_assign(&mut self, rhs: &PauliOperator) {
        for (string, coeff) in &rhs.terms {
            self.add_term(string.clone(), *coeff);
        }
    }
}

impl AddAssign for PauliOperator {
    fn add_assign(&mut self, rhs: PauliOperator) {
        for (string, coeff) in rhs.terms {
            self.add_term(string, coeff);
        }
    }
}

impl SubAssign<&PauliOperator> for PauliOperator {
    fn sub_assign(&mut self, rhs: &PauliOperator) {
        for (string, coeff) in &rhs.terms {
            self.add_term(string.clone(), -*coeff);
        }
    }
}

impl Add for PauliOperator {
    type Output = PauliOperator;

    fn add(mut self, rhs: PauliOperator) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub for PauliOperator {
    type Output = PauliOperator;

    fn sub(mut self, rhs: PauliOperator) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl Neg for PauliOperator {
    type Output = PauliOperator;

    fn neg(self) -> Self::Output {
        self.scaled(Complex64::new(-1.0, 0.0))
    }
}

impl Mul<f64> for PauliOperator {
    type Output = PauliOperator;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(Complex64::new(rhs, 0.0))
    }
}

impl Mul<Complex64> for PauliOperator {
    type Output = PauliOperator;

    fn mul(self, rhs: Complex64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul for &PauliOperator {
    type Output = PauliOperator;

    fn mul(self, rhs: &PauliOperator) -> Self::Output {
        let mut out = PauliOperator::zero();
        for (a, ca) in &self.terms {
            for (b, cb) in &rhs.terms {
                let (phase, string) = a.multiply(b);
                out.add_term(string, ca * cb * phase);
            }
        }
        out
    }
}

impl fmt::Display for PauliOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (string, coeff)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({},{}) {}", coeff.re + 0.0, coeff.im + 0.0, string)?;
        }
        Ok(())
    }
}

fn parse_coefficient(token: &str) -> Result<Complex64> {
    let inner = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| QuantumError::parse(token, "coefficient must be '(re,im)'"))?;
    let (re, im) = inner
        .split_once(',')
        .ok_or_else(|| QuantumError::parse(token, "coefficient must be '(re,im)'"))?;
    let re = re
        .trim()
        .parse::<f64>()
        .map_err(|e| QuantumError::parse(token, e.to_string()))?;
    let im = im
        .trim()
        .parse::<f64>()
        .map_err(|e| QuantumError::parse(token, e.to_string()))?;
    Ok(Complex64::new(re, im))
}

fn parse_factor(token: &str) -> Result<(usize, Pauli)> {
    let mut chars = token.chars();
    let pauli = chars
        .next()
        .and_then(Pauli::from_char)
        .ok_or_else(|| QuantumError::parse(token, "expected X, Y or Z followed by a qubit index"))?;
    let qubit = chars
        .as_str()
        .parse::<usize>()
        .map_err(|e| QuantumError::parse(token, e.to_string()))?;
    Ok((qubit, pauli))
}

impl FromStr for PauliOperator {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "0" {
            return Ok(PauliOperator::zero());
        }

        let mut op = PauliOperator::zero();
        let mut current: Option<(Complex64, Vec<(usize, Pauli)>)> = None;

        for token in trimmed.split_whitespace() {
            if token == "+" {
                continue;
            }
            if token.starts_with('(') {
                if let Some((coeff, factors)) = current.take() {
                    op.add_term(PauliString::from_ops(factors)?, coeff);
                }
                current = Some((parse_coefficient(token)?, Vec::new()));
            } else if token == "I" {
                // identity factor; an uncoefficiented "I" means weight one
                current.get_or_insert((ONE, Vec::new()));
            } else {
                let factor = parse_factor(token)?;
                current.get_or_insert((ONE, Vec::new())).1.push(factor);
            }
        }
        if let Some((coeff, factors)) = current {
            op.add_term(PauliString::from_ops(factors)?, coeff);
        }
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn string(s: &[(usize, Pauli)]) -> PauliString {
        PauliString::from_ops(s.iter().copied()).unwrap()
    }

    #[test]
    fn test_single_qubit_products() {
        assert_eq!(Pauli::X.multiply(Pauli::Y), (I, Some(Pauli::Z)));
        assert_eq!(Pauli::Y.multiply(Pauli::X), (NEG_I, Some(Pauli::Z)));
        assert_eq!(Pauli::Z.multiply(Pauli::X), (I, Some(Pauli::Y)));
        assert_eq!(Pauli::Z.multiply(Pauli::Z), (ONE, None));
    }

    #[test]
    fn test_string_from_ops_sorts() {
        let s = string(&[(3, Pauli::Y), (0, Pauli::X)]);
        assert_eq!(s.to_string(), "X0 Y3");
        assert_eq!(s.get(3), Some(Pauli::Y));
        assert_eq!(s.get(1), None);
        assert_eq!(s.max_qubit(), Some(3));
    }

    #[test]
    fn test_string_from_ops_rejects_duplicates() {
        let result = PauliString::from_ops([(1, Pauli::X), (1, Pauli::Z)]);
        assert!(matches!(result, Err(QuantumError::DuplicateQubit(q)) if q.index() == 1));
    }

    #[test]
    fn test_string_multiply_disjoint_and_overlap() {
        let a = string(&[(0, Pauli::Z), (2, Pauli::X)]);
        let b = string(&[(1, Pauli::Y), (2, Pauli::Y)]);
        let (phase, product) = a.multiply(&b);
        assert_eq!(phase, I);
        assert_eq!(product.to_string(), "Z0 Y1 Z2");

        let (phase, product) = a.multiply(&a);
        assert_eq!(phase, ONE);
        assert!(product.is_identity());
    }

    #[test]
    fn test_operator_product_anticommutation() {
        let x = PauliOperator::term(PauliString::single(0, Pauli::X), 1.0);
        let z = PauliOperator::term(PauliString::single(0, Pauli::Z), 1.0);
        let anticommutator = &x * &z + &z * &x;
        assert!(anticommutator.is_empty());
    }

    #[test]
    fn test_cancellation() {
        let x = PauliOperator::term(PauliString::single(4, Pauli::X), 0.5);
        assert!((x.clone() - x).is_empty());
    }

    #[test]
    fn test_num_qubits() {
        assert_eq!(PauliOperator::zero().num_qubits(), 0);
        assert_eq!(PauliOperator::identity(1.0).num_qubits(), 0);
        let op = PauliOperator::term(string(&[(0, Pauli::X), (5, Pauli::Z)]), 1.0);
        assert_eq!(op.num_qubits(), 6);
    }

    #[test]
    fn test_hermiticity_checks() {
        let s = string(&[(0, Pauli::X), (1, Pauli::Y)]);
        let anti = PauliOperator::term(s.clone(), Complex64::new(0.0, 0.5));
        assert!(anti.is_anti_hermitian(1e-12));
        assert!(!anti.is_hermitian(1e-12));
        assert!(anti.hermitian_conjugate().approx_eq(&-anti.clone(), 1e-15));
    }

    #[test]
    fn test_display() {
        let mut op = PauliOperator::identity(0.25);
        op.add_term(string(&[(0, Pauli::X), (1, Pauli::Y)]), Complex64::new(0.0, -0.5));
        assert_eq!(op.to_string(), "(0.25,0) I + (0,-0.5) X0 Y1");
        assert_eq!(PauliOperator::zero().to_string(), "0");
    }

    #[test]
    fn test_parse_textual_form() {
        let op: PauliOperator = "(0,0.125) X0 Z1 Y2 + (0,-0.125) Y0 Z1 X2 + (1.5,0) I"
            .parse()
            .unwrap();
        assert_eq!(op.len(), 3);
        let c = op
            .coefficient(&string(&[(0, Pauli::Y), (1, Pauli::Z), (2, Pauli::X)]))
            .unwrap();
        assert_relative_eq!(c.im, -0.125);
        assert_eq!(op.coefficient(&PauliString::identity()), Some(Complex64::new(1.5, 0.0)));
    }

    #[test]
    fn test_parse_without_coefficient() {
        let op: PauliOperator = "X0 X1".parse().unwrap();
        assert_eq!(op.coefficient(&string(&[(0, Pauli::X), (1, Pauli::X)])), Some(ONE));
    }

    #[test]
    fn test_parse_zero() {
        assert!("0".parse::<PauliOperator>().unwrap().is_empty());
        assert!("".parse::<PauliOperator>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!("(1,0) Q3".parse::<PauliOperator>().is_err());
        assert!("(1;0) X3".parse::<PauliOperator>().is_err());
        assert!("(1,0) Xa".parse::<PauliOperator>().is_err());
        assert!("(1,0) X1 Z1".parse::<PauliOperator>().is_err());
    }
}
