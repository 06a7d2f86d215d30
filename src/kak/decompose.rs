// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! KAK decomposer implementation.
//!
//! Ref: Kraus & Cirac (2001), "Optimal creation of entanglement using a
//! two-qubit gate", Phys. Rev. A 63, 062309. arXiv:quant-ph/0011050

use std::f64::consts::PI;
use std::sync::LazyLock;

use ndarray::{Array2, Axis};
use num_complex::Complex64;
use tracing::debug;

use super::types::{canonical_arg, CartanFactors, InteractionAngles};
use crate::config::NumericsConfig;
use crate::error::{Error, Result};
use crate::linalg::{
    adjoint, c, is_unitary, max_abs_diff, real_determinant, real_symmetric_eigen, to_nalgebra,
};

/// Unnormalised magic basis; scaled by 1/√2 in [`MAGIC_BASIS`].
const MAGIC_BASIS_UNNORMALIZED: [[Complex64; 4]; 4] = [
    [
        Complex64::new(1., 0.),
        Complex64::new(0., 0.),
        Complex64::new(0., 0.),
        Complex64::new(0., 1.),
    ],
    [
        Complex64::new(0., 0.),
        Complex64::new(0., 1.),
        Complex64::new(1., 0.),
        Complex64::new(0., 0.),
    ],
    [
        Complex64::new(0., 0.),
        Complex64::new(0., 1.),
        Complex64::new(-1., 0.),
        Complex64::new(0., 0.),
    ],
    [
        Complex64::new(1., 0.),
        Complex64::new(0., 0.),
        Complex64::new(0., 0.),
        Complex64::new(0., -1.),
    ],
];

/// Magic basis change Q = (1/√2)·[[1,0,0,i],[0,i,1,0],[0,i,−1,0],[1,0,0,−i]].
pub static MAGIC_BASIS: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    let scale = 1.0 / 2.0_f64.sqrt();
    Array2::from_shape_fn((4, 4), |(i, j)| MAGIC_BASIS_UNNORMALIZED[i][j] * scale)
});

/// Q†.
pub static MAGIC_BASIS_DAGGER: LazyLock<Array2<Complex64>> =
    LazyLock::new(|| adjoint(&MAGIC_BASIS));

/// Number of real mixes of Re(M) and Im(M) tried before giving up.
const MAX_MIXING_ATTEMPTS: usize = 100;

/// First mixing pair; later pairs walk the unit circle by the golden angle.
const INITIAL_MIXING: (f64, f64) = (1.260_206_611_224_938_8, 0.223_178_490_467_220_27);

/// Golden angle in radians: successive mixes never repeat a direction.
const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_79);

/// Cartan (KAK) decomposer for two-qubit unitaries.
#[derive(Debug, Clone)]
pub struct CartanDecomposer {
    unitary: Array2<Complex64>,
    numerics: NumericsConfig,
}

impl CartanDecomposer {
    /// Create a decomposer for a 4×4 unitary with default numerics.
    pub fn new(unitary: Array2<Complex64>) -> Result<Self> {
        Self::with_numerics(unitary, NumericsConfig::default())
    }

    /// Create a decomposer with explicit tolerances and iteration budgets.
    pub fn with_numerics(unitary: Array2<Complex64>, numerics: NumericsConfig) -> Result<Self> {
        if unitary.dim() != (4, 4) {
            return Err(Error::Dimension(format!(
                "KAK decomposition requires a 4x4 unitary, got {}x{}",
                unitary.nrows(),
                unitary.ncols()
            )));
        }
        if !is_unitary(&unitary, numerics.tolerance.max(1e-12) * 10.0) {
            return Err(Error::Decomposition(
                "input matrix is not unitary within tolerance".into(),
            ));
        }
        Ok(Self { unitary, numerics })
    }

    /// The matrix being decomposed.
    pub fn unitary(&self) -> &Array2<Complex64> {
        &self.unitary
    }

    /// Factor the unitary into `K1 · A · K2` (up to the recorded global phase).
    pub fn solve(&self) -> Result<CartanFactors> {
        let tol = self.numerics.tolerance;

        // Normalise to SU(4); the removed phase is reported separately.
        let det = to_nalgebra(&self.unitary).determinant();
        let global_phase = canonical_arg(det) / 4.0;
        let u = &self.unitary * Complex64::from_polar(1.0, -global_phase);

        // 1. Magic basis
        let u_magic = MAGIC_BASIS_DAGGER.dot(&u).dot(&*MAGIC_BASIS);

        // 2. Non-local invariant (plain transpose)
        let m = u_magic.t().dot(&u_magic);

        // 3. Real orthogonal diagonalisation M = O2ᵀ · diag(λ) · O2,
        //    eigenpairs ordered by descending phase
        let (unsorted, vectors) = self.diagonalize_symmetric_unitary(&m)?;
        let mut order = [0, 1, 2, 3];
        let phases = unsorted.map(canonical_arg);
        order.sort_by(|&i, &j| phases[j].total_cmp(&phases[i]));
        let eigenvalues = order.map(|k| unsorted[k]);
        let mut o2 = vectors.select(Axis(0), &order);
        if real_determinant(&o2) < 0.0 {
            o2.row_mut(3).mapv_inplace(|x| -x);
        }

        // 4. A = diag(√λ) with a canonical determinant sign
        let mut a_diagonal = eigenvalues
            .map(|lambda| Complex64::from_polar(lambda.norm().sqrt(), canonical_arg(lambda) / 2.0));
        let det_a: Complex64 = a_diagonal.iter().product();
        if det_a.re < 0.0 {
            a_diagonal[0] = -a_diagonal[0];
        }

        // 5. O1 = U_magic · O2ᵀ · A⁻¹
        let mut a_inverse = [c(0.0); 4];
        for (k, entry) in a_diagonal.iter().enumerate() {
            if entry.norm() < tol {
                return Err(Error::Decomposition(format!(
                    "diagonal entry {} of A is numerically zero ({:.3e})",
                    k,
                    entry.norm()
                )));
            }
            a_inverse[k] = entry.inv();
        }
        let o2_complex = o2.mapv(c);
        let mut o1 = u_magic.dot(&o2_complex.t());
        for (mut column, inv) in o1.columns_mut().into_iter().zip(a_inverse.iter()) {
            column.mapv_inplace(|x| x * inv);
        }

        // 6. Back to the computational basis
        let a_magic = Array2::from_diag(&ndarray::arr1(&a_diagonal));
        let to_computational =
            |x: &Array2<Complex64>| MAGIC_BASIS.dot(x).dot(&*MAGIC_BASIS_DAGGER);

        let factors = CartanFactors {
            k1: to_computational(&o1),
            a: to_computational(&a_magic),
            k2: to_computational(&o2_complex),
            a_diagonal,
            eigenvalues,
            global_phase,
        };

        debug!(
            global_phase,
            reconstruction_error = max_abs_diff(&factors.reconstruct(), &self.unitary),
            "KAK decomposition complete"
        );

        Ok(factors)
    }

    /// Interaction coefficients of the unitary's non-local part.
    pub fn angles(&self) -> Result<InteractionAngles> {
        Ok(self.solve()?.angles())
    }

    /// Diagonalise a complex symmetric unitary with a real orthogonal basis.
    ///
    /// For unitary symmetric `M = R + iJ` the real symmetric parts commute,
    /// so a generic real combination `αR + βJ` shares their eigenvectors.
    /// Unlucky mixes can hit an accidental degeneracy, so each candidate is
    /// checked against `M` and the next direction is tried on failure.
    ///
    /// Returns the eigenvalues and `O2` whose rows are the eigenvectors.
    fn diagonalize_symmetric_unitary(
        &self,
        m: &Array2<Complex64>,
    ) -> Result<([Complex64; 4], Array2<f64>)> {
        let tol = self.numerics.tolerance;
        let real = m.mapv(|x| x.re);
        let imag = m.mapv(|x| x.im);

        let mut mixing = INITIAL_MIXING;
        for attempt in 0..MAX_MIXING_ATTEMPTS {
            if attempt > 0 {
                let angle = attempt as f64 * GOLDEN_ANGLE;
                mixing = (angle.cos(), angle.sin());
            }
            let mixed = &real * mixing.0 + &imag * mixing.1;
            let (_, vectors) = real_symmetric_eigen(&mixed, &self.numerics)?;

            let p = vectors.mapv(c);
            let d = p.t().dot(m).dot(&p);
            let eigenvalues = [d[[0, 0]], d[[1, 1]], d[[2, 2]], d[[3, 3]]];

            let diag = Array2::from_diag(&ndarray::arr1(&eigenvalues));
            let rebuilt = p.dot(&diag).dot(&p.t());
            let error = max_abs_diff(&rebuilt, m);
            if error <= tol {
                debug!(attempt, error, "Diagonalised magic-basis invariant");
                return Ok((eigenvalues, vectors.reversed_axes()));
            }
            debug!(attempt, error, "Real mix did not diagonalise M, retrying");
        }

        Err(Error::Decomposition(format!(
            "failed to diagonalise U_magicᵀU_magic with a real orthogonal basis after {} attempts",
            MAX_MIXING_ATTEMPTS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::identity;
    use crate::test_utils::{
        assert_matrix_close, cnot, is_local, iswap, pseudo_random_su2, pseudo_random_unitary, swap,
    };
    use approx::assert_abs_diff_eq;
    use ndarray::linalg::kron;
    use std::f64::consts::FRAC_PI_4;

    fn assert_valid_factors(u: &Array2<Complex64>, factors: &CartanFactors) {
        assert_matrix_close(&factors.reconstruct(), u, 1e-9);
        assert!(is_unitary(&factors.k1, 1e-9), "K1 not unitary");
        assert!(is_unitary(&factors.k2, 1e-9), "K2 not unitary");
        assert!(is_unitary(&factors.a, 1e-9), "A not unitary");
    }

    #[test]
    fn test_magic_basis_is_unitary() {
        assert!(is_unitary(&MAGIC_BASIS, 1e-14));
        assert_matrix_close(&MAGIC_BASIS.dot(&*MAGIC_BASIS_DAGGER), &identity(4), 1e-14);
    }

    #[test]
    fn test_rejects_wrong_dimension() {
        let err = CartanDecomposer::new(identity(2)).unwrap_err();
        assert!(matches!(err, Error::Dimension(_)));
    }

    #[test]
    fn test_rejects_non_unitary() {
        let err = CartanDecomposer::new(identity(4) * c(0.5)).unwrap_err();
        assert!(matches!(err, Error::Decomposition(_)));
    }

    #[test]
    fn test_identity_decomposes_trivially() {
        let u = identity(4);
        let factors = CartanDecomposer::new(u.clone()).unwrap().solve().unwrap();
        assert_valid_factors(&u, &factors);
        let angles = factors.angles();
        assert!(angles.ax.abs() < 1e-9);
        assert!(angles.ay.abs() < 1e-9);
        assert!(angles.az.abs() < 1e-9);
    }

    #[test]
    fn test_cnot_reconstructs_with_local_factors() {
        let u = cnot();
        let factors = CartanDecomposer::new(u.clone()).unwrap().solve().unwrap();
        assert_valid_factors(&u, &factors);
        assert!(is_local(&factors.k1, 1e-8), "K1 should be a product operator");
        assert!(is_local(&factors.k2, 1e-8), "K2 should be a product operator");
    }

    #[test]
    fn test_swap_reconstructs() {
        let u = swap();
        let factors = CartanDecomposer::new(u.clone()).unwrap().solve().unwrap();
        assert_valid_factors(&u, &factors);
        assert!(is_local(&factors.k1, 1e-8));
        assert!(is_local(&factors.k2, 1e-8));
    }

    #[test]
    fn test_generic_unitaries_reconstruct() {
        for seed in 1..6 {
            let u = pseudo_random_unitary(4, seed);
            let factors = CartanDecomposer::new(u.clone()).unwrap().solve().unwrap();
            assert_valid_factors(&u, &factors);
            assert!(is_local(&factors.k1, 1e-8), "seed {seed}: K1 not local");
            assert!(is_local(&factors.k2, 1e-8), "seed {seed}: K2 not local");
        }
    }

    #[test]
    fn test_a_is_diagonal_in_magic_basis() {
        let u = pseudo_random_unitary(4, 11);
        let factors = CartanDecomposer::new(u).unwrap().solve().unwrap();
        let a_magic = MAGIC_BASIS_DAGGER.dot(&factors.a).dot(&*MAGIC_BASIS);
        for ((i, j), val) in a_magic.indexed_iter() {
            if i != j {
                assert!(val.norm() < 1e-9, "off-diagonal ({i}, {j}) = {val}");
            }
        }
        // A² reproduces the eigenvalues of the invariant
        for (a, lambda) in factors.a_diagonal.iter().zip(factors.eigenvalues.iter()) {
            assert!((a * a - lambda).norm() < 1e-9);
        }
    }

    #[test]
    fn test_local_gate_has_zero_interaction() {
        // Z ⊗ X is local: no entangling content
        let mut zx = Array2::zeros((4, 4));
        zx[[0, 1]] = c(1.0);
        zx[[1, 0]] = c(1.0);
        zx[[2, 3]] = c(-1.0);
        zx[[3, 2]] = c(-1.0);
        let factors = CartanDecomposer::new(zx.clone()).unwrap().solve().unwrap();
        assert_valid_factors(&zx, &factors);
        let angles = factors.angles();
        assert!(angles.ax.abs() < 1e-9, "{angles:?}");
        assert!(angles.ay.abs() < 1e-9, "{angles:?}");
        assert!(angles.az.abs() < 1e-9, "{angles:?}");
    }

    #[test]
    fn test_angles_are_reproducible() {
        let decomposer = CartanDecomposer::new(pseudo_random_unitary(4, 3)).unwrap();
        assert_eq!(decomposer.angles().unwrap(), decomposer.angles().unwrap());
    }

    #[test]
    fn test_global_phase_is_recorded() {
        let phase = Complex64::from_polar(1.0, 0.7);
        let u = identity(4) * phase;
        let factors = CartanDecomposer::new(u.clone()).unwrap().solve().unwrap();
        assert_valid_factors(&u, &factors);
        assert!((factors.global_phase - 0.7).abs() < 1e-12);
    }

    fn assert_angles(u: &Array2<Complex64>, expected: (f64, f64, f64)) {
        let factors = CartanDecomposer::new(u.clone()).unwrap().solve().unwrap();
        assert_valid_factors(u, &factors);
        let angles = factors.angles();
        assert_abs_diff_eq!(angles.ax, expected.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angles.ay, expected.1, epsilon = 1e-9);
        assert_abs_diff_eq!(angles.az, expected.2, epsilon = 1e-9);
    }

    #[test]
    fn test_cnot_angles() {
        assert_angles(&cnot(), (0.0, 0.0, FRAC_PI_4));
    }

    #[test]
    fn test_swap_angles() {
        assert_angles(&swap(), (FRAC_PI_4, FRAC_PI_4, FRAC_PI_4));
    }

    #[test]
    fn test_iswap_angles() {
        assert_angles(&iswap(), (0.0, FRAC_PI_4, FRAC_PI_4));
    }

    #[test]
    fn test_entangling_gates_are_distinguished() {
        let angles = |u: Array2<Complex64>| CartanDecomposer::new(u).unwrap().angles().unwrap();
        let identity_angles = angles(identity(4));
        let cnot_angles = angles(cnot());
        let swap_angles = angles(swap());
        let iswap_angles = angles(iswap());
        assert_ne!(swap_angles, identity_angles);
        assert_ne!(cnot_angles, iswap_angles);
        assert_ne!(cnot_angles, swap_angles);
        assert_ne!(iswap_angles, swap_angles);
    }

    #[test]
    fn test_local_dressing_preserves_angles() {
        let swap_angles = CartanDecomposer::new(swap()).unwrap().angles().unwrap();
        for seed in 1..4 {
            let left = kron(&pseudo_random_su2(seed), &pseudo_random_su2(seed + 10));
            let right = kron(&pseudo_random_su2(seed + 20), &pseudo_random_su2(seed + 30));
            let dressed = left.dot(&swap()).dot(&right);
            let factors = CartanDecomposer::new(dressed.clone()).unwrap().solve().unwrap();
            assert_valid_factors(&dressed, &factors);
            let angles = factors.angles();
            assert_abs_diff_eq!(angles.ax, swap_angles.ax, epsilon = 1e-9);
            assert_abs_diff_eq!(angles.ay, swap_angles.ay, epsilon = 1e-9);
            assert_abs_diff_eq!(angles.az, swap_angles.az, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_eigenvalues_sorted_by_descending_phase() {
        let factors = CartanDecomposer::new(pseudo_random_unitary(4, 7))
            .unwrap()
            .solve()
            .unwrap();
        let phases = factors.eigenvalues.map(canonical_arg);
        assert!(phases.windows(2).all(|w| w[0] >= w[1]), "{phases:?}");
    }
}
