// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Block-encoding construction and application.

use ndarray::{s, Array2};
use num_complex::Complex64;
use tracing::{debug, warn};

use crate::config::NumericsConfig;
use crate::error::{Error, Result};
use crate::linalg::{adjoint, c, hermitian_sqrt, identity, row_major, spectral_norm};
use crate::simulator::{Qubit, Simulator};
use crate::validation::{validate_finite_matrix, validate_power_of_two, validate_square};

/// Spectral norms above `1 - NEAR_UNIT_NORM` make the dilation blocks
/// nearly singular.
const NEAR_UNIT_NORM: f64 = 1e-6;

/// What a [`BlockEncoding`] embeds.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodingKind {
    /// Real scalar `s` with `|s| ≤ 1`.
    Scalar(f64),
    /// Square contraction `A` (spectral norm `≤ 1`).
    Matrix(Array2<Complex64>),
}

/// A unitary whose top-left block is the encoded operand.
///
/// The unitary and its adjoint are kept both as matrices and as row-major
/// buffers ready for the simulator.
#[derive(Debug, Clone)]
pub struct BlockEncoding {
    kind: EncodingKind,
    unitary: Array2<Complex64>,
    unitary_dagger: Array2<Complex64>,
    unitary_buffer: Vec<Complex64>,
    adjoint_buffer: Vec<Complex64>,
    num_qubits: u32,
}

impl BlockEncoding {
    /// Encode a real scalar as `[[s, q], [q, -s]]` with `q = √(1 − s²)`.
    pub fn from_scalar(scalar: f64) -> Result<Self> {
        if !scalar.is_finite() || scalar.abs() > 1.0 {
            return Err(Error::EncodingBound(format!(
                "scalar {} is outside [-1, 1]",
                scalar
            )));
        }
        let q = (1.0 - scalar * scalar).max(0.0).sqrt();
        let unitary = ndarray::array![[c(scalar), c(q)], [c(q), c(-scalar)]];
        debug!(scalar, q, "Built scalar block encoding");
        Ok(Self::assemble(EncodingKind::Scalar(scalar), unitary, 1))
    }

    /// Encode a square matrix with default numerics.
    pub fn from_matrix(matrix: &Array2<Complex64>) -> Result<Self> {
        Self::from_matrix_with_numerics(matrix, &NumericsConfig::default())
    }

    /// Encode a square `n × n` matrix in the `2n × 2n` unitary dilation
    ///
    /// ```text
    /// [ A               (I − AA†)^½ ]
    /// [ (I − A†A)^½     −A†         ]
    /// ```
    ///
    /// `n` must be a power of two so the dilation acts on whole qubits.
    /// Eigenvalues of the defect matrices `I − AA†` and `I − A†A` below
    /// `numerics.tolerance` are taken as zero, so a unitary `A` gets exactly
    /// zero off-diagonal blocks. The dilation is then unitary to within
    /// `numerics.tolerance`.
    pub fn from_matrix_with_numerics(
        matrix: &Array2<Complex64>,
        numerics: &NumericsConfig,
    ) -> Result<Self> {
        validate_square("matrix", matrix)?;
        let n = matrix.nrows();
        let system_qubits = validate_power_of_two("matrix", n)?;
        validate_finite_matrix("matrix", matrix)?;

        let norm = spectral_norm(matrix, numerics)?;
        if norm > 1.0 + numerics.tolerance {
            return Err(Error::EncodingBound(format!(
                "spectral norm {:.12} exceeds 1",
                norm
            )));
        }
        if norm > 1.0 - NEAR_UNIT_NORM {
            warn!(norm, "Spectral norm is within round-off of 1");
        }

        let a_dagger = adjoint(matrix);
        let eye = identity(n);
        let top_right = hermitian_sqrt(&(&eye - &matrix.dot(&a_dagger)), numerics)?;
        let bottom_left = hermitian_sqrt(&(&eye - &a_dagger.dot(matrix)), numerics)?;

        let mut unitary = Array2::zeros((2 * n, 2 * n));
        unitary.slice_mut(s![..n, ..n]).assign(matrix);
        unitary.slice_mut(s![..n, n..]).assign(&top_right);
        unitary.slice_mut(s![n.., ..n]).assign(&bottom_left);
        unitary.slice_mut(s![n.., n..]).assign(&a_dagger.mapv(|x| -x));

        debug!(dimension = n, norm, "Built matrix block encoding");
        Ok(Self::assemble(
            EncodingKind::Matrix(matrix.clone()),
            unitary,
            system_qubits + 1,
        ))
    }

    fn assemble(kind: EncodingKind, unitary: Array2<Complex64>, num_qubits: u32) -> Self {
        let unitary_dagger = adjoint(&unitary);
        Self {
            kind,
            unitary_buffer: row_major(&unitary),
            adjoint_buffer: row_major(&unitary_dagger),
            unitary,
            unitary_dagger,
            num_qubits,
        }
    }

    /// The encoded unitary.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.unitary
    }

    /// Its conjugate transpose.
    pub fn adjoint(&self) -> &Array2<Complex64> {
        &self.unitary_dagger
    }

    pub fn kind(&self) -> &EncodingKind {
        &self.kind
    }

    /// Qubits spanned by the unitary.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Top-left block, which equals the encoded operand.
    pub fn encoded_block(&self) -> Array2<Complex64> {
        let n = self.unitary.nrows() / 2;
        self.unitary.slice(s![..n, ..n]).to_owned()
    }

    /// Issue the unitary on qubits `target ..`.
    pub fn apply<S: Simulator + ?Sized>(&self, sim: &mut S, target: Qubit) -> Result<()> {
        sim.apply_matrix(&self.unitary_buffer, target)
    }

    /// Issue the adjoint on qubits `target ..`.
    pub fn apply_adjoint<S: Simulator + ?Sized>(&self, sim: &mut S, target: Qubit) -> Result<()> {
        sim.apply_matrix(&self.adjoint_buffer, target)
    }

    /// Issue the unitary conditioned on all `controls` being |1⟩.
    pub fn controlled_apply<S: Simulator + ?Sized>(
        &self,
        sim: &mut S,
        controls: &[Qubit],
        target: Qubit,
    ) -> Result<()> {
        sim.apply_controlled_matrix(controls, &self.unitary_buffer, target)
    }

    /// Issue the unitary conditioned on all `controls` being |0⟩.
    pub fn anti_controlled_apply<S: Simulator + ?Sized>(
        &self,
        sim: &mut S,
        controls: &[Qubit],
        target: Qubit,
    ) -> Result<()> {
        sim.apply_anti_controlled_matrix(controls, &self.unitary_buffer, target)
    }
}
