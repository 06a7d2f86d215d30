// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QSVT toolkit
//!
//! Matrix decompositions that turn a scalar, matrix or two-qubit unitary into
//! operations a state-vector simulator can execute.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 qsvt (CLI)                    │
//! ├──────────────┬───────────────┬───────────────┤
//! │  qsp         │  kak          │  lcu          │
//! │  (phases)    │  (Cartan)     │  (Pauli)      │
//! ├──────────────┤               │               │
//! │  encoding    │               │               │
//! ├──────────────┴───────────────┴───────────────┤
//! │        linalg (ndarray ↔ nalgebra)            │
//! ├──────────────────────────────────────────────┤
//! │        simulator (trait + state vector)       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`encoding`]: Block encodings of scalars and contractions
//! - [`kak`]: KAK decomposition of two-qubit unitaries
//! - [`lcu`]: Pauli-basis (LCU) decomposition
//! - [`qsp`]: QSP phase sequences and their application
//! - [`simulator`]: Simulator trait and the reference state-vector simulator
//! - [`linalg`]: Shared dense linear algebra
//! - [`config`]: Configuration management
//! - [`input`]: Matrix file loading
//! - [`validation`]: Input validation utilities
//! - [`error`]: Error types

pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod kak;
pub mod lcu;
pub mod linalg;
pub mod qsp;
pub mod simulator;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
