// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Simulator collaborator.
//!
//! This module provides the [`Simulator`] trait through which encodings and
//! signal-processing sequences issue gates, and one implementation:
//!
//! - `state_vector::StateVectorSimulator`: dense in-memory state vector

pub mod state_vector;
pub mod r#trait;

pub use r#trait::{Qubit, Simulator};
pub use state_vector::StateVectorSimulator;
