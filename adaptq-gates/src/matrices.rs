//! Gate matrices used by the Pauli-exponential gate set
//!
//! Matrices are row-major. For two-qubit gates the first qubit of the
//! operation is the high bit of the row index.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

const INV_SQRT2: f64 = 0.7071067811865476; // 1/√2

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// CNOT gate matrix (control is the first qubit)
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// RX(θ) = exp(-iθX/2)
pub fn rotation_x(theta: f64) -> [[Complex64; 2]; 2] {
    let half_theta = theta / 2.0;
    let cos_val = half_theta.cos();
    let sin_val = half_theta.sin();

    [
        [Complex64::new(cos_val, 0.0), Complex64::new(0.0, -sin_val)],
        [Complex64::new(0.0, -sin_val), Complex64::new(cos_val, 0.0)],
    ]
}

/// RZ(θ) = exp(-iθZ/2)
pub fn rotation_z(theta: f64) -> [[Complex64; 2]; 2] {
    let half_theta = theta / 2.0;

    [
        [Complex64::new(half_theta.cos(), -half_theta.sin()), ZERO],
        [ZERO, Complex64::new(half_theta.cos(), half_theta.sin())],
    ]
}

/// Flatten a square matrix into the row-major `Vec` the `Gate` trait returns
pub(crate) fn flatten<const N: usize>(matrix: &[[Complex64; N]; N]) -> Vec<Complex64> {
    matrix.iter().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn is_unitary_2x2(m: &[[Complex64; 2]; 2]) -> bool {
        for i in 0..2 {
            for j in 0..2 {
                let mut sum = ZERO;
                for k in 0..2 {
                    sum += m[k][i].conj() * m[k][j];
                }
                let expected = if i == j { ONE } else { ZERO };
                if (sum - expected).norm() > 1e-12 {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_hadamard_unitary() {
        assert!(is_unitary_2x2(&HADAMARD));
    }

    #[test]
    fn test_rotations_unitary() {
        for &theta in &[0.0, 0.3, PI / 2.0, -1.7] {
            assert!(is_unitary_2x2(&rotation_x(theta)));
            assert!(is_unitary_2x2(&rotation_z(theta)));
        }
    }

    #[test]
    fn test_rotation_x_half_pi() {
        let m = rotation_x(PI / 2.0);
        assert_relative_eq!(m[0][0].re, INV_SQRT2, epsilon = 1e-15);
        assert_relative_eq!(m[0][1].im, -INV_SQRT2, epsilon = 1e-15);
    }

    #[test]
    fn test_flatten_cnot() {
        let flat = flatten(&CNOT);
        assert_eq!(flat.len(), 16);
        assert_eq!(flat[11], ONE);
        assert_eq!(flat[14], ONE);
        assert_eq!(flat[15], ZERO);
    }
}
