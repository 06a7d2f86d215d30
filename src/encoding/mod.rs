// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Block encodings of scalars and contractive matrices.
//!
//! A block encoding embeds an operand `A` with `‖A‖ ≤ 1` as the top-left
//! block of a unitary `U`, so that `(⟨0| ⊗ I) U (|0⟩ ⊗ I) = A`. Two
//! constructions are provided:
//!
//! - [`BlockEncoding::from_scalar`]: the 2×2 reflection `[[s, q], [q, −s]]`
//! - [`BlockEncoding::from_matrix`]: the Halmos dilation built from Hermitian
//!   square roots of the defect operators `I − AA†` and `I − A†A`
//!
//! Encodings are issued to a [`crate::simulator::Simulator`] as row-major
//! buffers computed once at construction.

pub mod block;

pub use block::{BlockEncoding, EncodingKind};
