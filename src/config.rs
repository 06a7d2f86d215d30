// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management for the toolkit.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. config file (qsvt.yaml)
//! 3. Environment variables (QSVT_*)
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Hard ceiling for any qubit limit: 4^n Pauli strings of 2^n × 2^n entries
/// stop fitting in memory long before this.
const ABSOLUTE_MAX_QUBITS: u32 = 30;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Numerical tolerances and solver budgets
    #[serde(default)]
    pub numerics: NumericsConfig,

    /// Resource limits
    #[serde(default)]
    pub limits: ResourceLimits,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        // Load from file if specified
        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yml::from_str(&content)?;
            }
        } else {
            // Try default locations
            for path in &["qsvt.yaml", "qsvt.yml", "/etc/qsvt/config.yaml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yml::from_str(&content)?;
                    break;
                }
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("QSVT_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("QSVT_LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("QSVT_TOLERANCE") {
            if let Ok(tol) = val.parse() {
                self.numerics.tolerance = tol;
            }
        }
        if let Ok(val) = env::var("QSVT_MAX_EIGEN_ITERATIONS") {
            if let Ok(n) = val.parse() {
                self.numerics.max_eigen_iterations = n;
            }
        }
        if let Ok(val) = env::var("QSVT_MAX_QUBITS") {
            if let Ok(n) = val.parse() {
                self.limits.max_qubits = n;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        self.numerics.validate()?;
        self.limits.validate()?;
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(Error::Config(format!(
                "logging format must be 'json' or 'pretty', got '{}'",
                self.logging.format
            )));
        }
        if self.numerics.tolerance > 1e-3 {
            tracing::warn!(
                tolerance = self.numerics.tolerance,
                "Numerical tolerance is loose; unitarity and reconstruction checks \
                 will accept visibly wrong results."
            );
        }
        Ok(())
    }
}

/// Numerical tolerances and iteration budgets shared by every decomposition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericsConfig {
    /// Absolute tolerance for norm bounds, unitarity and reconstruction checks
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration budget for the symmetric eigen solver
    #[serde(default = "default_max_eigen_iterations")]
    pub max_eigen_iterations: usize,

    /// Iteration budget for the singular-value solver
    #[serde(default = "default_max_svd_iterations")]
    pub max_svd_iterations: usize,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_eigen_iterations: default_max_eigen_iterations(),
            max_svd_iterations: default_max_svd_iterations(),
        }
    }
}

impl NumericsConfig {
    /// Validate tolerance and iteration budgets.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::Config(format!(
                "numerics.tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_eigen_iterations == 0 {
            return Err(Error::Config(
                "numerics.max_eigen_iterations must be > 0".into(),
            ));
        }
        if self.max_svd_iterations == 0 {
            return Err(Error::Config(
                "numerics.max_svd_iterations must be > 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_tolerance() -> f64 {
    1e-9
}

fn default_max_eigen_iterations() -> usize {
    1000
}

fn default_max_svd_iterations() -> usize {
    1000
}

/// Resource limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Maximum number of qubits accepted for a Pauli (LCU) decomposition
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,

    /// Maximum length of a QSP phase sequence
    #[serde(default = "default_max_phases")]
    pub max_phases: u32,

    /// Maximum register size of the bundled state-vector simulator
    #[serde(default = "default_max_simulator_qubits")]
    pub max_simulator_qubits: u32,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_qubits: default_max_qubits(),
            max_phases: default_max_phases(),
            max_simulator_qubits: default_max_simulator_qubits(),
        }
    }
}

impl ResourceLimits {
    /// Validate the limits themselves.
    pub fn validate(&self) -> Result<()> {
        if self.max_qubits > ABSOLUTE_MAX_QUBITS {
            return Err(Error::Config(format!(
                "limits.max_qubits cannot exceed {}",
                ABSOLUTE_MAX_QUBITS
            )));
        }
        if self.max_simulator_qubits == 0 || self.max_simulator_qubits > ABSOLUTE_MAX_QUBITS {
            return Err(Error::Config(format!(
                "limits.max_simulator_qubits must be in 1..={}",
                ABSOLUTE_MAX_QUBITS
            )));
        }
        if self.max_phases == 0 {
            return Err(Error::Config("limits.max_phases must be > 0".into()));
        }
        Ok(())
    }
}

fn default_max_qubits() -> u32 {
    5
}

fn default_max_phases() -> u32 {
    10_000
}

fn default_max_simulator_qubits() -> u32 {
    20
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}
