// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Quantum signal processing (QSP) sequences.
//!
//! Given a single-qubit signal unitary `Ua` (typically the block encoding of
//! a scalar `s`) and phases `θ_0 … θ_m`, the sequence
//!
//! `RZ(−2θ_m) · Ua · RZ(−2θ_{m−1}) · … · Ua · RZ(−2θ_0)`
//!
//! implements a degree-`m` polynomial of `s` in its top-left entry. Phases
//! are supplied by the caller; finding them is out of scope here.

pub mod apply;
pub mod types;

pub use apply::SignalProcessor;
pub use types::PhaseSequence;
