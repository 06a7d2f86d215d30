// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dense complex linear algebra shared by the decompositions.
//!
//! Matrices are stored as `ndarray::Array2<Complex64>` in standard (row-major)
//! layout throughout the crate. The spectral routines (singular values,
//! self-adjoint eigen-decomposition) are delegated to `nalgebra`; this module
//! owns the conversions in both directions so callers never see a `DMatrix`.

use nalgebra::DMatrix;
use ndarray::Array2;
use num_complex::Complex64;

use crate::config::NumericsConfig;
use crate::error::{Error, Result};

/// Helper: create Complex64 from f64
#[inline]
pub fn c(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

/// n × n complex identity.
pub fn identity(n: usize) -> Array2<Complex64> {
    Array2::from_diag_elem(n, c(1.0))
}

/// Conjugate transpose A†.
pub fn adjoint(a: &Array2<Complex64>) -> Array2<Complex64> {
    a.t().mapv(|x| x.conj())
}

/// Trace of a square matrix.
pub fn trace(a: &Array2<Complex64>) -> Complex64 {
    a.diag().sum()
}

/// Largest element-wise modulus of A − B.
///
/// # Panics
/// Panics if the shapes differ.
pub fn max_abs_diff(a: &Array2<Complex64>, b: &Array2<Complex64>) -> f64 {
    assert_eq!(a.shape(), b.shape(), "max_abs_diff requires equal shapes");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

/// Check U†U = I element-wise within `tol`.
pub fn is_unitary(u: &Array2<Complex64>, tol: f64) -> bool {
    if u.nrows() != u.ncols() {
        return false;
    }
    let product = adjoint(u).dot(u);
    max_abs_diff(&product, &identity(u.nrows())) <= tol
}

/// Row-major copy of a matrix as a flat buffer, the layout simulators consume.
pub fn row_major(a: &Array2<Complex64>) -> Vec<Complex64> {
    a.iter().copied().collect()
}

/// Copy an ndarray matrix into an nalgebra one.
pub fn to_nalgebra(a: &Array2<Complex64>) -> DMatrix<Complex64> {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]])
}

/// Copy an nalgebra matrix back into ndarray (standard layout).
pub fn from_nalgebra(m: &DMatrix<Complex64>) -> Array2<Complex64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// Spectral norm (largest singular value) of `a`.
///
/// Returns [`Error::Decomposition`] if the SVD does not converge within
/// `numerics.max_svd_iterations`.
pub fn spectral_norm(a: &Array2<Complex64>, numerics: &NumericsConfig) -> Result<f64> {
    if a.is_empty() {
        return Ok(0.0);
    }
    let svd = to_nalgebra(a)
        .try_svd(false, false, f64::EPSILON, numerics.max_svd_iterations)
        .ok_or_else(|| {
            Error::Decomposition(format!(
                "singular value decomposition of a {}x{} matrix did not converge",
                a.nrows(),
                a.ncols()
            ))
        })?;
    Ok(svd.singular_values.iter().copied().fold(0.0, f64::max))
}

/// Principal square root of a Hermitian positive-semidefinite matrix.
///
/// Eigenvalues with `|λ| < numerics.tolerance` are treated as exactly zero,
/// and any remaining negative eigenvalue is clamped to zero, before the root
/// is taken. Only the lower triangle of `h` is read.
pub fn hermitian_sqrt(h: &Array2<Complex64>, numerics: &NumericsConfig) -> Result<Array2<Complex64>> {
    let n = h.nrows();
    if n != h.ncols() {
        return Err(Error::Dimension(format!(
            "hermitian_sqrt requires a square matrix, got {}x{}",
            n,
            h.ncols()
        )));
    }
    if n == 0 {
        return Ok(Array2::zeros((0, 0)));
    }

    let eigen = to_nalgebra(h)
        .try_symmetric_eigen(f64::EPSILON, numerics.max_eigen_iterations)
        .ok_or_else(|| {
            Error::Decomposition(format!(
                "self-adjoint eigen-decomposition of a {n}x{n} matrix did not converge"
            ))
        })?;

    let roots = eigen.eigenvalues.map(|lambda| {
        if lambda.abs() < numerics.tolerance {
            c(0.0)
        } else {
            c(lambda.max(0.0).sqrt())
        }
    });
    let v = &eigen.eigenvectors;
    let root = v * DMatrix::from_diagonal(&roots) * v.adjoint();
    Ok(from_nalgebra(&root))
}

/// Eigen-decomposition of a real symmetric matrix.
///
/// Returns the eigenvalues and a real orthogonal matrix whose *columns* are
/// the matching eigenvectors.
pub fn real_symmetric_eigen(
    a: &Array2<f64>,
    numerics: &NumericsConfig,
) -> Result<(Vec<f64>, Array2<f64>)> {
    let n = a.nrows();
    let m = DMatrix::from_fn(n, a.ncols(), |i, j| a[[i, j]]);
    let eigen = m
        .try_symmetric_eigen(f64::EPSILON, numerics.max_eigen_iterations)
        .ok_or_else(|| {
            Error::Decomposition(format!(
                "real symmetric eigen-decomposition of a {n}x{n} matrix did not converge"
            ))
        })?;
    let vectors = Array2::from_shape_fn((n, n), |(i, j)| eigen.eigenvectors[(i, j)]);
    Ok((eigen.eigenvalues.iter().copied().collect(), vectors))
}

/// Determinant of a small real matrix via LU.
pub fn real_determinant(a: &Array2<f64>) -> f64 {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]]).determinant()
}
