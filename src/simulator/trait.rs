// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Simulator collaborator trait definition.

use num_complex::Complex64;

use crate::error::Result;

/// Index of a qubit in the simulator's register.
///
/// Handles are owned by the simulator; the decompositions only pass them
/// through.
pub type Qubit = u32;

/// The gate-issuing surface every simulator must implement.
///
/// Matrices are passed as contiguous row-major buffers of `d × d` complex
/// entries where `d = 2ᵏ`; a `2ᵏ × 2ᵏ` matrix acts on qubits
/// `target .. target + k`, with `target` as the least significant bit of the
/// local index. Range and aliasing checks belong to the implementation.
pub trait Simulator {
    /// Number of qubits in the register.
    fn num_qubits(&self) -> u32;

    /// Apply an arbitrary unitary to the target qubit(s).
    fn apply_matrix(&mut self, matrix: &[Complex64], target: Qubit) -> Result<()>;

    /// Apply a unitary conditioned on every control qubit being |1⟩.
    fn apply_controlled_matrix(
        &mut self,
        controls: &[Qubit],
        matrix: &[Complex64],
        target: Qubit,
    ) -> Result<()>;

    /// Apply a unitary conditioned on every control qubit being |0⟩.
    fn apply_anti_controlled_matrix(
        &mut self,
        controls: &[Qubit],
        matrix: &[Complex64],
        target: Qubit,
    ) -> Result<()>;

    /// Rotation about Z: diag(e^{−iφ/2}, e^{iφ/2}).
    fn apply_rz(&mut self, angle: f64, target: Qubit) -> Result<()>;

    /// Probability of measuring |1⟩ on `qubit`.
    fn probability(&self, qubit: Qubit) -> Result<f64>;
}
