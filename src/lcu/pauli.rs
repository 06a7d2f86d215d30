// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pauli operators and n-qubit Pauli strings.

use std::fmt;
use std::sync::LazyLock;

use ndarray::{linalg::kron, Array2};
use num_complex::Complex64;
use serde::Serialize;

static PAULI_I: LazyLock<Array2<Complex64>> =
    LazyLock::new(|| Array2::from_diag_elem(2, Complex64::new(1.0, 0.0)));

static PAULI_X: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    let mut m = Array2::zeros((2, 2));
    m[[0, 1]] = Complex64::new(1.0, 0.0);
    m[[1, 0]] = Complex64::new(1.0, 0.0);
    m
});

static PAULI_Y: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    let mut m = Array2::zeros((2, 2));
    m[[0, 1]] = Complex64::new(0.0, -1.0);
    m[[1, 0]] = Complex64::new(0.0, 1.0);
    m
});

static PAULI_Z: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    let mut m = Array2::zeros((2, 2));
    m[[0, 0]] = Complex64::new(1.0, 0.0);
    m[[1, 1]] = Complex64::new(-1.0, 0.0);
    m
});

/// Single-qubit Pauli operator. Discriminants are the base-4 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pauli {
    I = 0,
    X = 1,
    Y = 2,
    Z = 3,
}

impl Pauli {
    pub const ALL: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

    /// Pauli for a base-4 digit (taken modulo 4).
    pub fn from_digit(digit: usize) -> Self {
        Self::ALL[digit % 4]
    }

    pub fn symbol(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// The 2×2 generator.
    pub fn matrix(self) -> &'static Array2<Complex64> {
        match self {
            Pauli::I => &PAULI_I,
            Pauli::X => &PAULI_X,
            Pauli::Y => &PAULI_Y,
            Pauli::Z => &PAULI_Z,
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Tensor product of single-qubit Paulis.
///
/// `ops[0]` is the least significant digit and the innermost (rightmost)
/// Kronecker factor; each later digit is tensored on the left.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliString {
    ops: Vec<Pauli>,
    matrix: Array2<Complex64>,
}

impl PauliString {
    /// Build the string from its digits, least significant first.
    pub fn new(ops: Vec<Pauli>) -> Self {
        let mut matrix = Array2::from_elem((1, 1), Complex64::new(1.0, 0.0));
        for op in &ops {
            matrix = kron(op.matrix(), &matrix);
        }
        Self { ops, matrix }
    }

    /// The string with base-4 index `index` over `num_qubits` qubits.
    pub fn from_index(index: usize, num_qubits: u32) -> Self {
        let mut rest = index;
        let ops = (0..num_qubits)
            .map(|_| {
                let op = Pauli::from_digit(rest % 4);
                rest /= 4;
                op
            })
            .collect();
        Self::new(ops)
    }

    /// All 4ⁿ strings in base-4 index order. `n = 0` gives the 1×1 identity.
    pub fn basis(num_qubits: u32) -> Vec<PauliString> {
        let count = 1usize << (2 * num_qubits);
        (0..count)
            .map(|index| Self::from_index(index, num_qubits))
            .collect()
    }

    /// Digits, least significant first.
    pub fn ops(&self) -> &[Pauli] {
        &self.ops
    }

    pub fn num_qubits(&self) -> usize {
        self.ops.len()
    }

    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Label with the most significant digit leftmost, e.g. `"XZ"`.
    /// The empty string is labelled `"I"`.
    pub fn label(&self) -> String {
        if self.ops.is_empty() {
            return "I".to_string();
        }
        self.ops.iter().rev().map(|op| op.symbol()).collect()
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{adjoint, identity, is_unitary};
    use crate::test_utils::assert_matrix_close;

    #[test]
    fn test_generators_square_to_identity() {
        for p in Pauli::ALL {
            let m = p.matrix();
            assert_matrix_close(&m.dot(m), &identity(2), 1e-15);
            assert_matrix_close(m, &adjoint(m), 1e-15);
        }
    }

    #[test]
    fn test_xyz_product() {
        // XY = iZ
        let xy = Pauli::X.matrix().dot(Pauli::Y.matrix());
        let iz = Pauli::Z.matrix() * Complex64::new(0.0, 1.0);
        assert_matrix_close(&xy, &iz, 1e-15);
    }

    #[test]
    fn test_basis_sizes() {
        assert_eq!(PauliString::basis(0).len(), 1);
        assert_eq!(PauliString::basis(1).len(), 4);
        assert_eq!(PauliString::basis(2).len(), 16);
        assert_eq!(PauliString::basis(3).len(), 64);
    }

    #[test]
    fn test_zero_qubit_string_is_scalar_identity() {
        let basis = PauliString::basis(0);
        assert_eq!(basis[0].matrix().dim(), (1, 1));
        assert_eq!(basis[0].matrix()[[0, 0]], Complex64::new(1.0, 0.0));
        assert_eq!(basis[0].label(), "I");
    }

    #[test]
    fn test_first_digit_is_innermost_factor() {
        // index 1 = digits [X, I] -> I ⊗ X
        let s = PauliString::from_index(1, 2);
        assert_eq!(s.ops(), &[Pauli::X, Pauli::I]);
        assert_eq!(s.label(), "IX");
        let expected = kron(Pauli::I.matrix(), Pauli::X.matrix());
        assert_matrix_close(s.matrix(), &expected, 1e-15);
    }

    #[test]
    fn test_label_most_significant_first() {
        // 13 = 1 + 3*4 -> digits [X, Z]
        let s = PauliString::from_index(13, 2);
        assert_eq!(s.label(), "ZX");
        assert_eq!(s.to_string(), "ZX");
        let expected = kron(Pauli::Z.matrix(), Pauli::X.matrix());
        assert_matrix_close(s.matrix(), &expected, 1e-15);
    }

    #[test]
    fn test_basis_strings_are_unitary_and_orthogonal() {
        let basis = PauliString::basis(2);
        for (i, a) in basis.iter().enumerate() {
            assert!(is_unitary(a.matrix(), 1e-14));
            for (j, b) in basis.iter().enumerate() {
                let overlap = crate::linalg::trace(&adjoint(a.matrix()).dot(b.matrix()));
                let expected = if i == j { 4.0 } else { 0.0 };
                assert!((overlap - Complex64::new(expected, 0.0)).norm() < 1e-12);
            }
        }
    }
}
