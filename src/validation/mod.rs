// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Input validation for decomposition requests.

use ndarray::Array2;
use num_complex::Complex64;

use crate::config::ResourceLimits;
use crate::error::{Error, Result, ValidationError};

/// Validate that a matrix is square and non-empty.
pub fn validate_square(field: &str, matrix: &Array2<Complex64>) -> Result<()> {
    if matrix.nrows() != matrix.ncols() {
        return Err(Error::Dimension(format!(
            "{} must be square, got {}x{}",
            field,
            matrix.nrows(),
            matrix.ncols()
        )));
    }
    if matrix.is_empty() {
        return Err(Error::Dimension(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Validate that `dim` is a power of two and return its base-2 logarithm.
///
/// A dimension of 1 is 2⁰ and yields 0 qubits.
pub fn validate_power_of_two(field: &str, dim: usize) -> Result<u32> {
    if dim == 0 || !dim.is_power_of_two() {
        return Err(Error::Dimension(format!(
            "{} dimension {} is not a power of 2",
            field, dim
        )));
    }
    Ok(dim.trailing_zeros())
}

/// Validate that no matrix entry is NaN or infinite.
pub fn validate_finite_matrix(field: &str, matrix: &Array2<Complex64>) -> Result<()> {
    for ((i, j), val) in matrix.indexed_iter() {
        if !(val.re.is_finite() && val.im.is_finite()) {
            return Err(ValidationError::Field {
                field: field.into(),
                message: format!("non-finite entry {} at ({}, {})", val, i, j),
            }
            .into());
        }
    }
    Ok(())
}

/// Validate a phase sequence: finite angles, within the configured length.
///
/// Emptiness is not checked here; an empty sequence is a processing error
/// raised by the sequence constructor itself.
pub fn validate_phases(phases: &[f64], limits: &ResourceLimits) -> Result<()> {
    if phases.len() > limits.max_phases as usize {
        return Err(ValidationError::ResourceLimit {
            resource: "phases".into(),
            limit: limits.max_phases as u64,
            requested: phases.len() as u64,
        }
        .into());
    }

    for (i, val) in phases.iter().enumerate() {
        if val.is_nan() {
            return Err(ValidationError::Field {
                field: "phases".into(),
                message: format!("contains NaN at index {}", i),
            }
            .into());
        }
        if val.is_infinite() {
            return Err(ValidationError::Field {
                field: "phases".into(),
                message: format!("contains Inf at index {}", i),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a qubit count against a limit.
pub fn validate_qubit_count(resource: &str, num_qubits: u32, limit: u32) -> Result<()> {
    if num_qubits > limit {
        return Err(ValidationError::ResourceLimit {
            resource: resource.into(),
            limit: limit as u64,
            requested: num_qubits as u64,
        }
        .into());
    }
    Ok(())
}
