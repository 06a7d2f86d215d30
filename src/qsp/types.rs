// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QSP phase sequences.

use serde::Serialize;

use crate::config::ResourceLimits;
use crate::error::{Error, Result};
use crate::validation::validate_phases;

/// Non-empty, finite list of QSP phases `θ_0 … θ_m`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PhaseSequence(Vec<f64>);

impl PhaseSequence {
    /// Validate against the default resource limits.
    pub fn new(phases: Vec<f64>) -> Result<Self> {
        Self::with_limits(phases, &ResourceLimits::default())
    }

    pub fn with_limits(phases: Vec<f64>, limits: &ResourceLimits) -> Result<Self> {
        if phases.is_empty() {
            return Err(Error::Processing(
                "phase sequence must contain at least one angle".into(),
            ));
        }
        validate_phases(&phases, limits)?;
        Ok(Self(phases))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of signal-unitary applications (`m` for `m + 1` phases).
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }
}

impl TryFrom<Vec<f64>> for PhaseSequence {
    type Error = Error;

    fn try_from(phases: Vec<f64>) -> Result<Self> {
        Self::new(phases)
    }
}
