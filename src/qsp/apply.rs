// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Issuing a QSP sequence to a simulator.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::types::PhaseSequence;
use crate::encoding::BlockEncoding;
use crate::error::{Error, Result};
use crate::linalg::{identity, row_major};
use crate::simulator::{Qubit, Simulator};

/// Interleaves Z rotations with a single-qubit signal unitary `Ua`:
///
/// `RZ(−2θ_m) · Ua · … · RZ(−2θ_1) · Ua · RZ(−2θ_0)`
#[derive(Debug, Clone)]
pub struct SignalProcessor {
    signal: Array2<Complex64>,
    signal_buffer: Vec<Complex64>,
    phases: PhaseSequence,
    target: Qubit,
}

impl SignalProcessor {
    /// `ua` must be 2×2.
    pub fn new(ua: Array2<Complex64>, phases: PhaseSequence) -> Result<Self> {
        if ua.dim() != (2, 2) {
            return Err(Error::Dimension(format!(
                "signal unitary must be 2x2, got {}x{}",
                ua.nrows(),
                ua.ncols()
            )));
        }
        Ok(Self {
            signal_buffer: row_major(&ua),
            signal: ua,
            phases,
            target: 0,
        })
    }

    /// Use a (scalar) block encoding as the signal unitary.
    pub fn from_encoding(encoding: &BlockEncoding, phases: PhaseSequence) -> Result<Self> {
        Self::new(encoding.matrix().clone(), phases)
    }

    /// Act on `target` instead of qubit 0.
    pub fn with_target(mut self, target: Qubit) -> Self {
        self.target = target;
        self
    }

    pub fn phases(&self) -> &PhaseSequence {
        &self.phases
    }

    pub fn signal_unitary(&self) -> &Array2<Complex64> {
        &self.signal
    }

    pub fn target(&self) -> Qubit {
        self.target
    }

    /// Issue the sequence. Calling again issues the identical sequence.
    ///
    /// A target outside the simulator's register is rejected before any
    /// gate is issued.
    pub fn apply<S: Simulator + ?Sized>(&self, sim: &mut S) -> Result<()> {
        let register = sim.num_qubits();
        if self.target >= register {
            return Err(Error::Simulator(format!(
                "target qubit {} out of range for a {}-qubit register",
                self.target, register
            )));
        }
        let (first, rest) = self
            .phases
            .as_slice()
            .split_first()
            .ok_or_else(|| Error::Processing("phase sequence is empty".into()))?;

        sim.apply_rz(-2.0 * first, self.target)?;
        for theta in rest {
            sim.apply_matrix(&self.signal_buffer, self.target)?;
            sim.apply_rz(-2.0 * theta, self.target)?;
        }

        debug!(
            num_phases = self.phases.len(),
            target = self.target,
            "Applied QSP sequence"
        );
        Ok(())
    }

    /// The 2×2 operator the sequence implements, computed directly.
    pub fn sequence_matrix(&self) -> Array2<Complex64> {
        let mut product = identity(2);
        for (k, theta) in self.phases.as_slice().iter().enumerate() {
            if k > 0 {
                product = self.signal.dot(&product);
            }
            product = rz(-2.0 * theta).dot(&product);
        }
        product
    }
}

/// diag(e^{−iφ/2}, e^{iφ/2}), matching `Simulator::apply_rz`.
fn rz(angle: f64) -> Array2<Complex64> {
    let mut m = Array2::zeros((2, 2));
    m[[0, 0]] = Complex64::from_polar(1.0, -angle / 2.0);
    m[[1, 1]] = Complex64::from_polar(1.0, angle / 2.0);
    m
}
