// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities.

use nalgebra::DMatrix;
use ndarray::Array2;
use num_complex::Complex64;

use crate::config::NumericsConfig;
use crate::error::{Error, Result};
use crate::linalg::{from_nalgebra, max_abs_diff, spectral_norm};
use crate::simulator::{Qubit, Simulator};

/// Assert two complex matrices agree entrywise within `tol`.
pub fn assert_matrix_close(actual: &Array2<Complex64>, expected: &Array2<Complex64>, tol: f64) {
    assert_eq!(actual.dim(), expected.dim(), "matrix shapes differ");
    let diff = max_abs_diff(actual, expected);
    assert!(
        diff < tol,
        "matrices differ by {diff:e} (tolerance {tol:e})\nactual:\n{actual}\nexpected:\n{expected}"
    );
}

/// CNOT with qubit 0 (most significant in the 4x4 index) as control.
pub fn cnot() -> Array2<Complex64> {
    let mut u = Array2::zeros((4, 4));
    u[[0, 0]] = Complex64::new(1.0, 0.0);
    u[[1, 1]] = Complex64::new(1.0, 0.0);
    u[[2, 3]] = Complex64::new(1.0, 0.0);
    u[[3, 2]] = Complex64::new(1.0, 0.0);
    u
}

/// SWAP of the two qubits.
pub fn swap() -> Array2<Complex64> {
    let mut u = Array2::zeros((4, 4));
    u[[0, 0]] = Complex64::new(1.0, 0.0);
    u[[1, 2]] = Complex64::new(1.0, 0.0);
    u[[2, 1]] = Complex64::new(1.0, 0.0);
    u[[3, 3]] = Complex64::new(1.0, 0.0);
    u
}

/// iSWAP: SWAP with a phase of i on the exchanged states.
pub fn iswap() -> Array2<Complex64> {
    let mut u = Array2::zeros((4, 4));
    u[[0, 0]] = Complex64::new(1.0, 0.0);
    u[[1, 2]] = Complex64::new(0.0, 1.0);
    u[[2, 1]] = Complex64::new(0.0, 1.0);
    u[[3, 3]] = Complex64::new(1.0, 0.0);
    u
}

/// Deterministic SU(2) matrix: a seeded unitary with its phase removed.
pub fn pseudo_random_su2(seed: u64) -> Array2<Complex64> {
    let u = pseudo_random_unitary(2, seed);
    let det = u[[0, 0]] * u[[1, 1]] - u[[0, 1]] * u[[1, 0]];
    u * Complex64::from_polar(1.0, -det.arg() / 2.0)
}

/// Whether a 4x4 operator is a tensor product `a ⊗ b`.
///
/// Realigns `V` so that a product operator becomes the rank-one matrix
/// `vec(a) vec(b)ᵀ`, then compares the Frobenius norm with the largest
/// singular value.
pub fn is_local(v: &Array2<Complex64>, tol: f64) -> bool {
    let mut realigned = Array2::zeros((4, 4));
    for i1 in 0..2 {
        for j1 in 0..2 {
            for i2 in 0..2 {
                for j2 in 0..2 {
                    realigned[[i1 * 2 + j1, i2 * 2 + j2]] = v[[2 * i1 + i2, 2 * j1 + j2]];
                }
            }
        }
    }
    let frobenius_sq: f64 = realigned.iter().map(|z: &Complex64| z.norm_sqr()).sum();
    let sigma = spectral_norm(&realigned, &NumericsConfig::default()).unwrap();
    (frobenius_sq - sigma * sigma).abs() < tol
}

/// Deterministic dense unitary of size `dim`, different for each `seed`.
pub fn pseudo_random_unitary(dim: usize, seed: u64) -> Array2<Complex64> {
    let s = seed as f64;
    let m = DMatrix::<Complex64>::from_fn(dim, dim, |i, j| {
        let x = (i * dim + j) as f64;
        Complex64::new(
            (1.7 * x + 0.9 * s + 0.3).sin() + 0.25 * (3.1 * x * s + 1.0).cos(),
            (2.3 * x - 1.3 * s + 0.7).cos() - 0.5 * (0.37 * x + s).sin(),
        )
    });
    from_nalgebra(&m.qr().q())
}

/// A call issued to [`RecordingSimulator`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Matrix {
        matrix: Vec<Complex64>,
        target: Qubit,
    },
    Controlled {
        controls: Vec<Qubit>,
        matrix: Vec<Complex64>,
        target: Qubit,
    },
    AntiControlled {
        controls: Vec<Qubit>,
        matrix: Vec<Complex64>,
        target: Qubit,
    },
    Rz {
        angle: f64,
        target: Qubit,
    },
}

/// Simulator that records every call and performs no arithmetic.
#[derive(Debug, Default)]
pub struct RecordingSimulator {
    pub num_qubits: u32,
    pub calls: Vec<Call>,
}

impl RecordingSimulator {
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            calls: Vec::new(),
        }
    }

    /// Angles of every recorded Rz call, in order.
    pub fn rz_angles(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Rz { angle, .. } => Some(*angle),
                _ => None,
            })
            .collect()
    }
}

impl Simulator for RecordingSimulator {
    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn apply_matrix(&mut self, matrix: &[Complex64], target: Qubit) -> Result<()> {
        self.calls.push(Call::Matrix {
            matrix: matrix.to_vec(),
            target,
        });
        Ok(())
    }

    fn apply_controlled_matrix(
        &mut self,
        controls: &[Qubit],
        matrix: &[Complex64],
        target: Qubit,
    ) -> Result<()> {
        self.calls.push(Call::Controlled {
            controls: controls.to_vec(),
            matrix: matrix.to_vec(),
            target,
        });
        Ok(())
    }

    fn apply_anti_controlled_matrix(
        &mut self,
        controls: &[Qubit],
        matrix: &[Complex64],
        target: Qubit,
    ) -> Result<()> {
        self.calls.push(Call::AntiControlled {
            controls: controls.to_vec(),
            matrix: matrix.to_vec(),
            target,
        });
        Ok(())
    }

    fn apply_rz(&mut self, angle: f64, target: Qubit) -> Result<()> {
        self.calls.push(Call::Rz { angle, target });
        Ok(())
    }

    fn probability(&self, _qubit: Qubit) -> Result<f64> {
        Ok(0.0)
    }
}

/// Simulator that rejects every operation.
#[derive(Debug, Default)]
pub struct FailingSimulator;

impl Simulator for FailingSimulator {
    fn num_qubits(&self) -> u32 {
        1
    }

    fn apply_matrix(&mut self, _matrix: &[Complex64], _target: Qubit) -> Result<()> {
        Err(Error::Simulator("mock matrix failure".to_string()))
    }

    fn apply_controlled_matrix(
        &mut self,
        _controls: &[Qubit],
        _matrix: &[Complex64],
        _target: Qubit,
    ) -> Result<()> {
        Err(Error::Simulator("mock controlled failure".to_string()))
    }

    fn apply_anti_controlled_matrix(
        &mut self,
        _controls: &[Qubit],
        _matrix: &[Complex64],
        _target: Qubit,
    ) -> Result<()> {
        Err(Error::Simulator("mock anti-controlled failure".to_string()))
    }

    fn apply_rz(&mut self, _angle: f64, _target: Qubit) -> Result<()> {
        Err(Error::Simulator("mock rz failure".to_string()))
    }

    fn probability(&self, _qubit: Qubit) -> Result<f64> {
        Err(Error::Simulator("mock probability failure".to_string()))
    }
}
