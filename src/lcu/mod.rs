// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Linear-combination-of-unitaries (LCU) decomposition over Pauli strings.
//!
//! The n-qubit Pauli strings form an orthogonal basis of `2ⁿ × 2ⁿ` matrices
//! under the Hilbert-Schmidt inner product, so any matrix expands exactly as
//! `A = Σ c_k P_k` with `c_k = Tr(P_k · A) / 2ⁿ`.
//!
//! Strings are indexed by base-4 digits (I=0, X=1, Y=2, Z=3), least
//! significant digit first; labels print the most significant digit on the
//! left so that `"ZX"` means `Z ⊗ X`.

pub mod decompose;
pub mod pauli;

pub use decompose::{PauliDecomposer, PauliDecomposition, PauliTerm};
pub use pauli::{Pauli, PauliString};
