// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! KAK (Cartan) decomposition of two-qubit unitaries.
//!
//! Any U ∈ U(4) factors as `U = e^{iφ} · K1 · A · K2` where `K1`, `K2` are
//! tensor products of single-qubit unitaries and `A` is diagonal in the magic
//! basis, carrying all of the entangling content.
//!
//! # Algorithm
//!
//! - Normalise `U` to SU(4) and move to the magic basis: `U_m = Q† U Q`
//! - Form the invariant `M = U_mᵀ U_m` and diagonalise it with a *real*
//!   orthogonal `O2` (see [`CartanDecomposer::solve`])
//! - `A = diag(√λ)`, `O1 = U_m O2ᵀ A⁻¹`
//! - Map `O1`, `A`, `O2` back with `Q · X · Q†`
//!
//! # References
//!
//! - Khaneja & Glaser (2001), "Cartan decomposition of SU(2^n) and control
//!   of spin systems", Chem. Phys. 267, 11.
//! - Vatan & Williams (2004), "Optimal quantum circuits for general
//!   two-qubit gates", Phys. Rev. A 69, 032315.

pub mod decompose;
pub mod types;

pub use decompose::{CartanDecomposer, MAGIC_BASIS, MAGIC_BASIS_DAGGER};
pub use types::{CartanFactors, InteractionAngles};
