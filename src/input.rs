//! Text input for weight matrices.
//!
//! A matrix is written one row per line, cells separated by whitespace or
//! commas. Blank lines and lines starting with `#` are ignored. Absent edges
//! may be written as `inf`, `∞`, `-` or `x`, or as a numeric marker (by
//! default `9999`) that the parser maps to [`crate::NO_EDGE`].

use std::io::Read;

use crate::graph::WeightMatrix;
use crate::{Error, Result};

/// Default numeric stand-in for an absent edge in user input
pub const DEFAULT_NO_EDGE_MARKER: f64 = 9999.0;

const NO_EDGE_TOKENS: &[&str] = &["inf", "INF", "Inf", "∞", "-", "x", "X"];

/// Parser for textual weight matrices
#[derive(Debug, Clone, Copy)]
pub struct MatrixParser {
    /// Finite value that stands for "no edge", if any
    no_edge_marker: Option<f64>,
}

impl Default for MatrixParser {
    fn default() -> Self {
        MatrixParser {
            no_edge_marker: Some(DEFAULT_NO_EDGE_MARKER),
        }
    }
}

impl MatrixParser {
    /// Creates a parser that treats `9999` as an absent edge
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numeric marker for absent edges (`None` disables it)
    pub fn with_no_edge_marker(mut self, marker: Option<f64>) -> Self {
        self.no_edge_marker = marker;
        self
    }

    pub fn no_edge_marker(&self) -> Option<f64> {
        self.no_edge_marker
    }

    /// Parses a matrix from text. Positions in parse errors are 1-based.
    pub fn parse_str(&self, text: &str) -> Result<WeightMatrix<f64>> {
        let mut rows = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .enumerate()
                .map(|(column, token)| self.parse_cell(token, line_no + 1, column + 1))
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }

        log::trace!("parsed {} matrix rows", rows.len());
        WeightMatrix::from_rows(rows)
    }

    /// Reads everything from `reader` and parses it
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<WeightMatrix<f64>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse_str(&text)
    }

    fn parse_cell(&self, token: &str, row: usize, column: usize) -> Result<f64> {
        if NO_EDGE_TOKENS.contains(&token) {
            return Ok(f64::INFINITY);
        }

        let value: f64 = token.parse().map_err(|_| Error::Parse {
            row,
            column,
            token: token.to_string(),
        })?;

        if value == f64::INFINITY {
            return Ok(f64::INFINITY);
        }
        if value.is_nan() || value == f64::NEG_INFINITY {
            return Err(Error::Parse {
                row,
                column,
                token: token.to_string(),
            });
        }

        match self.no_edge_marker {
            Some(marker) if value == marker => Ok(f64::INFINITY),
            _ => Ok(value),
        }
    }
}
