// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! KAK decomposition result types.

use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;
use serde::Serialize;

/// Phases within this distance of −π are folded onto +π.
const BRANCH_CUT_SNAP: f64 = 1e-10;

/// `arg(z)` in `(−π, π]`, with round-off just past the branch cut folded
/// onto +π so that `−1 ± 0i` always has phase π.
pub(crate) fn canonical_arg(z: Complex64) -> f64 {
    let theta = z.arg();
    if theta <= -PI + BRANCH_CUT_SNAP {
        theta + 2.0 * PI
    } else {
        theta
    }
}

/// Non-local interaction coefficients (α_x, α_y, α_z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractionAngles {
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
}

impl InteractionAngles {
    /// Derive the coefficients from the diagonal of `A` in the magic basis.
    ///
    /// Phases are sorted in descending order first so the result does not
    /// depend on the order the entries are stored in.
    pub fn from_a_diagonal(a_diagonal: &[Complex64; 4]) -> Self {
        let mut thetas = a_diagonal.map(canonical_arg);
        thetas.sort_by(|a, b| b.total_cmp(a));
        let [t1, t2, t3, t4] = thetas;
        Self {
            ax: (t1 - t2 - t3 + t4) / 4.0,
            ay: (t1 - t2 + t3 - t4) / 4.0,
            az: (t1 + t2 - t3 - t4) / 4.0,
        }
    }
}

/// Factors of a two-qubit unitary: `e^{-iφ}·U = K1 · A · K2`.
///
/// `K1` and `K2` are local (tensor products of single-qubit unitaries) and
/// `A` is diagonal in the magic basis.
#[derive(Debug, Clone)]
pub struct CartanFactors {
    /// Left local factor.
    pub k1: Array2<Complex64>,
    /// Non-local factor in the computational basis.
    pub a: Array2<Complex64>,
    /// Right local factor.
    pub k2: Array2<Complex64>,
    /// Diagonal of `A` in the magic basis.
    pub a_diagonal: [Complex64; 4],
    /// Eigenvalues of `U_magicᵀ U_magic`, sorted by descending phase and
    /// parallel to `a_diagonal` (`a_diagonal[k]² = eigenvalues[k]`).
    pub eigenvalues: [Complex64; 4],
    /// Global phase φ removed when normalising the input to SU(4).
    pub global_phase: f64,
}

impl CartanFactors {
    /// Interaction coefficients of the non-local part, from the phases of
    /// `a_diagonal`.
    pub fn angles(&self) -> InteractionAngles {
        InteractionAngles::from_a_diagonal(&self.a_diagonal)
    }

    /// `e^{iφ} · K1 · A · K2`, which equals the decomposed unitary.
    pub fn reconstruct(&self) -> Array2<Complex64> {
        let phase = Complex64::from_polar(1.0, self.global_phase);
        self.k1.dot(&self.a).dot(&self.k2) * phase
    }
}
