// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dense state-vector simulator.
//!
//! Stores all 2ⁿ amplitudes and applies every operation by direct
//! matrix-vector products on the affected sub-blocks. Bit `q` of a basis
//! index is the state of qubit `q`. Intended for small registers (tests, the
//! CLI reference run), not for performance work.

use ndarray::Array1;
use num_complex::Complex64;
use tracing::debug;

use super::r#trait::{Qubit, Simulator};
use crate::config::ResourceLimits;
use crate::error::{Error, Result};
use crate::validation::validate_qubit_count;

/// Which basis states a (possibly conditioned) block update touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Always,
    ControlsSet,
    ControlsClear,
}

/// State-vector simulator initialised to |0…0⟩.
#[derive(Debug, Clone)]
pub struct StateVectorSimulator {
    num_qubits: u32,
    amplitudes: Array1<Complex64>,
}

impl StateVectorSimulator {
    /// Create a register of `num_qubits` qubits with the default limits.
    pub fn new(num_qubits: u32) -> Result<Self> {
        Self::with_limits(num_qubits, &ResourceLimits::default())
    }

    /// Create a register, checking `num_qubits` against `limits`.
    pub fn with_limits(num_qubits: u32, limits: &ResourceLimits) -> Result<Self> {
        if num_qubits == 0 {
            return Err(Error::Simulator(
                "register must contain at least one qubit".into(),
            ));
        }
        validate_qubit_count("simulator_qubits", num_qubits, limits.max_simulator_qubits)?;

        let mut amplitudes = Array1::zeros(1usize << num_qubits);
        amplitudes[0] = Complex64::new(1.0, 0.0);
        debug!(num_qubits, "Initialised state-vector simulator");
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Return the register to |0…0⟩.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Current amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    fn check_qubit(&self, qubit: Qubit) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(Error::Simulator(format!(
                "qubit {} out of range for a {}-qubit register",
                qubit, self.num_qubits
            )));
        }
        Ok(())
    }

    /// Validate a row-major buffer and return (dimension, qubits spanned).
    fn block_shape(&self, matrix: &[Complex64], target: Qubit) -> Result<(usize, u32)> {
        let dim = (matrix.len() as f64).sqrt().round() as usize;
        if dim * dim != matrix.len() || dim < 2 || !dim.is_power_of_two() {
            return Err(Error::Simulator(format!(
                "matrix buffer of length {} is not a 2^k x 2^k operator",
                matrix.len()
            )));
        }
        let span = dim.trailing_zeros();
        self.check_qubit(target)?;
        if target + span > self.num_qubits {
            return Err(Error::Simulator(format!(
                "{}x{} operator on qubit {} exceeds the {}-qubit register",
                dim, dim, target, self.num_qubits
            )));
        }
        Ok((dim, span))
    }

    /// Bit mask of the controls, rejecting controls inside the target block.
    fn control_mask(&self, controls: &[Qubit], target: Qubit, span: u32) -> Result<usize> {
        let mut mask = 0usize;
        for &q in controls {
            self.check_qubit(q)?;
            if q >= target && q < target + span {
                return Err(Error::Simulator(format!(
                    "control qubit {} overlaps the target block starting at {}",
                    q, target
                )));
            }
            mask |= 1usize << q;
        }
        Ok(mask)
    }

    fn apply_block(
        &mut self,
        matrix: &[Complex64],
        target: Qubit,
        controls: &[Qubit],
        condition: Condition,
    ) -> Result<()> {
        let (dim, span) = self.block_shape(matrix, target)?;
        let mask = self.control_mask(controls, target, span)?;
        let block_mask = (dim - 1) << target;

        let mut local = vec![Complex64::new(0.0, 0.0); dim];
        for base in 0..self.amplitudes.len() {
            if base & block_mask != 0 {
                continue;
            }
            let active = match condition {
                Condition::Always => true,
                Condition::ControlsSet => base & mask == mask,
                Condition::ControlsClear => base & mask == 0,
            };
            if !active {
                continue;
            }

            for (k, slot) in local.iter_mut().enumerate() {
                *slot = self.amplitudes[base | (k << target)];
            }
            for row in 0..dim {
                let mut acc = Complex64::new(0.0, 0.0);
                for (col, amp) in local.iter().enumerate() {
                    acc += matrix[row * dim + col] * amp;
                }
                self.amplitudes[base | (row << target)] = acc;
            }
        }
        Ok(())
    }
}

impl Simulator for StateVectorSimulator {
    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn apply_matrix(&mut self, matrix: &[Complex64], target: Qubit) -> Result<()> {
        self.apply_block(matrix, target, &[], Condition::Always)
    }

    fn apply_controlled_matrix(
        &mut self,
        controls: &[Qubit],
        matrix: &[Complex64],
        target: Qubit,
    ) -> Result<()> {
        self.apply_block(matrix, target, controls, Condition::ControlsSet)
    }

    fn apply_anti_controlled_matrix(
        &mut self,
        controls: &[Qubit],
        matrix: &[Complex64],
        target: Qubit,
    ) -> Result<()> {
        self.apply_block(matrix, target, controls, Condition::ControlsClear)
    }

    fn apply_rz(&mut self, angle: f64, target: Qubit) -> Result<()> {
        self.check_qubit(target)?;
        let phase0 = Complex64::from_polar(1.0, -angle / 2.0);
        let phase1 = Complex64::from_polar(1.0, angle / 2.0);
        let bit = 1usize << target;
        for (index, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= if index & bit == 0 { phase0 } else { phase1 };
        }
        Ok(())
    }

    fn probability(&self, qubit: Qubit) -> Result<f64> {
        self.check_qubit(qubit)?;
        let bit = 1usize << qubit;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(index, _)| index & bit != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum())
    }
}
