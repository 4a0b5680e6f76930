//! Orbital spaces and excitation index enumeration
//!
//! Spatial orbital `k` occupies two spin-orbitals (qubits): alpha at `k` and
//! beta at `k + n_orbitals`. The lowest `n_occupied` spatial orbitals form
//! the closed-shell reference.

use crate::{PoolError, Result};

/// Occupied/virtual partition of the spatial orbitals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalSpace {
    n_occupied: usize,
    n_virtual: usize,
}

impl OrbitalSpace {
    /// Partition `n_qubits / 2` spatial orbitals for `n_electrons` electrons
    ///
    /// `n_occupied = ceil(n_electrons / 2)`, the rest are virtual.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidOrbitalSpace`] for an odd qubit count or
    /// when the electrons do not fit.
    pub fn new(n_electrons: usize, n_qubits: usize) -> Result<Self> {
        let invalid = |reason| PoolError::InvalidOrbitalSpace {
            n_electrons,
            n_qubits,
            reason,
        };
        if n_qubits % 2 != 0 {
            return Err(invalid("qubit count must be even (alpha and beta per orbital)"));
        }
        let n_occupied = n_electrons / 2 + n_electrons % 2;
        let n_virtual = (n_qubits / 2)
            .checked_sub(n_occupied)
            .ok_or_else(|| invalid("more occupied orbitals than spatial orbitals"))?;
        Ok(Self {
            n_occupied,
            n_virtual,
        })
    }

    #[inline]
    pub const fn n_occupied(&self) -> usize {
        self.n_occupied
    }

    #[inline]
    pub const fn n_virtual(&self) -> usize {
        self.n_virtual
    }

    #[inline]
    pub const fn n_orbitals(&self) -> usize {
        self.n_occupied + self.n_virtual
    }

    #[inline]
    pub const fn n_qubits(&self) -> usize {
        2 * self.n_orbitals()
    }

    /// Alpha spin-orbital of spatial orbital `k`
    #[inline]
    pub const fn alpha(&self, k: usize) -> usize {
        k
    }

    /// Beta spin-orbital of spatial orbital `k`
    #[inline]
    pub const fn beta(&self, k: usize) -> usize {
        k + self.n_orbitals()
    }

    /// Spatial orbital of the `a`-th virtual orbital
    #[inline]
    pub const fn virtual_orbital(&self, a: usize) -> usize {
        a + self.n_occupied
    }

    /// Spatial singles `(i, a)`, `i` occupied and `a` virtual, `i` outermost
    pub fn singles(&self) -> Vec<SingleExcitation> {
        let mut singles = Vec::with_capacity(self.n_occupied * self.n_virtual);
        for i in 0..self.n_occupied {
            for a in 0..self.n_virtual {
                singles.push(SingleExcitation::new(i, a));
            }
        }
        singles
    }

    /// Spatial doubles `(i, j, a, b)` with `j ≥ i` and `b ≥ a`
    ///
    /// Same-orbital pairs (`i == j`, `a == b`) are included.
    pub fn doubles(&self) -> Vec<DoubleExcitation> {
        let mut doubles = Vec::new();
        for i in 0..self.n_occupied {
            for j in i..self.n_occupied {
                for a in 0..self.n_virtual {
                    for b in a..self.n_virtual {
                        doubles.push(DoubleExcitation::new(i, j, a, b));
                    }
                }
            }
        }
        doubles
    }

    /// Occupied spin-orbitals: alpha block, then beta block
    pub fn occupied_spin_orbitals(&self) -> Vec<usize> {
        (0..self.n_occupied)
            .map(|k| self.alpha(k))
            .chain((0..self.n_occupied).map(|k| self.beta(k)))
            .collect()
    }

    /// Virtual spin-orbitals: alpha block, then beta block
    pub fn virtual_spin_orbitals(&self) -> Vec<usize> {
        let virtuals = self.n_occupied..self.n_orbitals();
        virtuals
            .clone()
            .map(|k| self.alpha(k))
            .chain(virtuals.map(|k| self.beta(k)))
            .collect()
    }

    /// 0 for alpha, 1 for beta
    #[inline]
    pub const fn spin_of(&self, spin_orbital: usize) -> usize {
        if spin_orbital < self.n_orbitals() {
            0
        } else {
            1
        }
    }

    /// Spin-conserving spin-orbital singles `(p, r)`, `p` occupied, `r` virtual
    pub fn spin_orbital_singles(&self) -> Vec<SingleExcitation> {
        let virtuals = self.virtual_spin_orbitals();
        self.occupied_spin_orbitals()
            .into_iter()
            .flat_map(|p| {
                virtuals
                    .iter()
                    .filter(move |&&r| self.spin_of(r) == self.spin_of(p))
                    .map(move |&r| SingleExcitation::new(p, r))
            })
            .collect()
    }

    /// Spin-conserving spin-orbital doubles `(p, q, r, s)`
    ///
    /// `p < q` occupied and `r < s` virtual, with `r` carrying the spin of
    /// `p` and `s` the spin of `q`.
    pub fn spin_orbital_doubles(&self) -> Vec<DoubleExcitation> {
        let occupied = self.occupied_spin_orbitals();
        let virtuals = self.virtual_spin_orbitals();
        let mut doubles = Vec::new();
        for (x, &p) in occupied.iter().enumerate() {
            for &q in &occupied[x + 1..] {
                for (y, &r) in virtuals.iter().enumerate() {
                    for &s in &virtuals[y + 1..] {
                        if self.spin_of(p) == self.spin_of(r) && self.spin_of(q) == self.spin_of(s) {
                            doubles.push(DoubleExcitation::new(p, q, r, s));
                        }
                    }
                }
            }
        }
        doubles
    }
}

/// Single excitation from orbital i to orbital a
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleExcitation {
    /// Occupied orbital index
    pub i: usize,
    /// Virtual orbital index
    pub a: usize,
}

/// Double excitation from orbitals (i,j) to (a,b)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleExcitation {
    /// First occupied orbital
    pub i: usize,
    /// Second occupied orbital
    pub j: usize,
    /// First virtual orbital
    pub a: usize,
    /// Second virtual orbital
    pub b: usize,
}

impl SingleExcitation {
    pub fn new(i: usize, a: usize) -> Self {
        Self { i, a }
    }
}

impl DoubleExcitation {
    pub fn new(i: usize, j: usize, a: usize, b: usize) -> Self {
        Self { i, j, a, b }
    }
}
