// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matrix files for the command-line tool.
//!
//! A matrix is written as a list of rows, each entry either a bare number
//! (purely real) or a `[re, im]` pair:
//!
//! ```yaml
//! rows:
//!   - [0.0, 1.0]
//!   - [[0.0, -1.0], 0.0]
//! ```
//!
//! Files ending in `.json` are parsed as JSON, everything else as YAML.

use std::path::Path;

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Real(f64),
    Complex([f64; 2]),
}

impl From<Entry> for Complex64 {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Real(re) => Complex64::new(re, 0.0),
            Entry::Complex([re, im]) => Complex64::new(re, im),
        }
    }
}

/// On-disk matrix representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixFile {
    pub rows: Vec<Vec<Entry>>,
}

impl MatrixFile {
    /// Every entry written as a `[re, im]` pair.
    pub fn from_array(matrix: &Array2<Complex64>) -> Self {
        let rows = matrix
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|z| Entry::Complex([z.re, z.im])).collect())
            .collect();
        Self { rows }
    }

    /// Convert to a dense matrix, rejecting empty and ragged row lists.
    pub fn to_array(&self) -> Result<Array2<Complex64>> {
        let nrows = self.rows.len();
        let ncols = self.rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(Error::Dimension("matrix file contains no entries".into()));
        }
        if let Some((i, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != ncols)
        {
            return Err(Error::Dimension(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                ncols
            )));
        }
        Ok(Array2::from_shape_fn((nrows, ncols), |(i, j)| {
            self.rows[i][j].into()
        }))
    }
}

/// Parse a matrix from YAML text.
pub fn parse_yaml(content: &str) -> Result<Array2<Complex64>> {
    let file: MatrixFile = serde_yml::from_str(content)?;
    file.to_array()
}

/// Parse a matrix from JSON text.
pub fn parse_json(content: &str) -> Result<Array2<Complex64>> {
    let file: MatrixFile = serde_json::from_str(content)?;
    file.to_array()
}

/// Load a matrix file, choosing the parser by extension.
pub fn load_matrix(path: &Path) -> Result<Array2<Complex64>> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json(&content)
    } else {
        parse_yaml(&content)
    }
}
