// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Projection of a matrix onto the n-qubit Pauli basis.

use ndarray::{Array2, Zip};
use num_complex::Complex64;
use serde::Serialize;
use tracing::debug;

use super::pauli::PauliString;
use crate::config::ResourceLimits;
use crate::error::Result;
use crate::validation::{
    validate_finite_matrix, validate_power_of_two, validate_qubit_count, validate_square,
};

/// Linear combination of Pauli strings: `A = Σ c_k P_k`.
#[derive(Debug, Clone)]
pub struct PauliDecomposition {
    num_qubits: u32,
    strings: Vec<PauliString>,
    coefficients: Vec<Complex64>,
}

/// One LCU term, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct PauliTerm {
    pub label: String,
    pub re: f64,
    pub im: f64,
}

impl PauliDecomposition {
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    pub fn pauli_strings(&self) -> &[PauliString] {
        &self.strings
    }

    /// Coefficients, parallel to [`pauli_strings`](Self::pauli_strings).
    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    /// Number of terms (always 4ⁿ).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&PauliString, Complex64)> + '_ {
        self.strings.iter().zip(self.coefficients.iter().copied())
    }

    /// `Σ c_k P_k`.
    pub fn reconstruct(&self) -> Array2<Complex64> {
        let dim = 1usize << self.num_qubits;
        let mut sum = Array2::zeros((dim, dim));
        for (string, coeff) in self.terms() {
            sum.scaled_add(coeff, string.matrix());
        }
        sum
    }

    /// Terms with `|c_k| > tol`, in basis order.
    pub fn significant_terms(&self, tol: f64) -> Vec<(&PauliString, Complex64)> {
        self.terms().filter(|(_, c)| c.norm() > tol).collect()
    }

    /// `Σ |c_k|`, the LCU normalisation.
    pub fn one_norm(&self) -> f64 {
        self.coefficients.iter().map(|c| c.norm()).sum()
    }

    /// Report rows for the significant terms.
    pub fn report(&self, tol: f64) -> Vec<PauliTerm> {
        self.significant_terms(tol)
            .into_iter()
            .map(|(string, c)| PauliTerm {
                label: string.label(),
                re: c.re,
                im: c.im,
            })
            .collect()
    }
}

/// Computes Pauli-basis decompositions within configured limits.
#[derive(Debug, Clone, Default)]
pub struct PauliDecomposer {
    limits: ResourceLimits,
}

impl PauliDecomposer {
    pub fn new(limits: ResourceLimits) -> Self {
        Self { limits }
    }

    /// Decompose a `2ⁿ × 2ⁿ` matrix into weighted Pauli strings.
    pub fn decompose(&self, matrix: &Array2<Complex64>) -> Result<PauliDecomposition> {
        validate_square("matrix", matrix)?;
        let num_qubits = validate_power_of_two("matrix", matrix.nrows())?;
        validate_qubit_count("pauli_qubits", num_qubits, self.limits.max_qubits)?;
        validate_finite_matrix("matrix", matrix)?;

        let strings = PauliString::basis(num_qubits);
        let scale = 1.0 / matrix.nrows() as f64;
        let coefficients = strings
            .iter()
            .map(|p| trace_of_product(p.matrix(), matrix) * scale)
            .collect();

        debug!(
            num_qubits,
            num_terms = strings.len(),
            "Pauli decomposition complete"
        );

        Ok(PauliDecomposition {
            num_qubits,
            strings,
            coefficients,
        })
    }
}

/// `Tr(P · A) = Σ_ij P_ij A_ji` without forming the product.
fn trace_of_product(p: &Array2<Complex64>, a: &Array2<Complex64>) -> Complex64 {
    let mut acc = Complex64::new(0.0, 0.0);
    Zip::from(p).and(&a.t()).for_each(|x, y| acc += x * y);
    acc
}
