// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the toolkit.

use std::fmt;

/// Result type alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Toolkit error types.
#[derive(Debug)]
pub enum Error {
    /// A scalar or matrix violates the contraction bound of a block encoding
    EncodingBound(String),
    /// An eigen/singular-value solve failed or a factor could not be inverted
    Decomposition(String),
    /// Input has the wrong shape (non-square, not a power of two, wrong size)
    Dimension(String),
    /// Signal-processing sequence cannot be issued
    Processing(String),
    /// Validation error
    Validation(ValidationError),
    /// Simulator collaborator rejected an operation
    Simulator(String),
    /// Configuration error
    Config(String),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EncodingBound(msg) => write!(f, "Encoding bound violated: {}", msg),
            Error::Decomposition(msg) => write!(f, "Decomposition failed: {}", msg),
            Error::Dimension(msg) => write!(f, "Dimension error: {}", msg),
            Error::Processing(msg) => write!(f, "Processing error: {}", msg),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::Simulator(msg) => write!(f, "Simulator error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<serde_yml::Error> for Error {
    fn from(e: serde_yml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Validation errors.
#[derive(Debug)]
pub enum ValidationError {
    /// Field validation failed
    Field { field: String, message: String },
    /// Resource limit exceeded
    ResourceLimit {
        resource: String,
        limit: u64,
        requested: u64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Field { field, message } => {
                write!(f, "Field '{}': {}", field, message)
            }
            ValidationError::ResourceLimit {
                resource,
                limit,
                requested,
            } => {
                write!(
                    f,
                    "Resource limit exceeded for {}: limit={}, requested={}",
                    resource, limit, requested
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
