//! Qubit addressing

use std::fmt;

/// Type-safe identifier for a qubit
///
/// In the spin-orbital layout used by the pools, qubit `k` is the alpha
/// spin-orbital of spatial orbital `k` and qubit `k + n_orbitals` is its
/// beta partner.
///
/// # Example
/// ```
/// use adaptq_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q1 = QubitId::new(1);
/// assert!(q0 < q1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    ///
    /// # Example
    /// ```
    /// use adaptq_core::QubitId;
    /// let q = QubitId::new(5);
    /// assert_eq!(q.index(), 5);
    /// ```
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}
