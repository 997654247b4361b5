//! Column justification for aligned text output.
//!
//! [`JustifyLines`] collects rows of string cells and pads every column to
//! the widest cell seen so far, so the separators line up:
//!
//! ```
//! use funwave_domain::text::{Justify, JustifyLines};
//!
//! let mut lines = JustifyLines::new(vec![Justify::Left, Justify::Left]).with_separator(" = ");
//! lines.push(["A", "1"]).unwrap();
//! lines.push(["BB", "22"]).unwrap();
//! assert_eq!(lines.lines(), vec!["A  = 1", "BB = 22"]);
//! ```
//!
//! Widths are measured in characters. A left-justified last column is not
//! padded, so lines never end in padding.

use std::str::FromStr;
use thiserror::Error;

/// Justification of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    /// Padding to put (before, after) a cell of `len` characters.
    fn padding(&self, len: usize, width: usize) -> (usize, usize) {
        let pad = width.saturating_sub(len);
        match self {
            Justify::Left => (0, pad),
            Justify::Right => (pad, 0),
            Justify::Center => (pad / 2, pad - pad / 2),
        }
    }
}

impl FromStr for Justify {
    type Err = JustifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l" | "left" => Ok(Justify::Left),
            "c" | "center" => Ok(Justify::Center),
            "r" | "right" => Ok(Justify::Right),
            _ => Err(JustifyError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JustifyError {
    #[error("row has {got} cells, expected {expected}")]
    ColumnCount { expected: usize, got: usize },

    #[error("{got} separators given for {columns} columns, expected {expected}")]
    SeparatorCount {
        columns: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown justification '{0}', expected l (left), c (center) or r (right)")]
    UnknownMode(String),
}

/// Row collector that renders equally wide, justified columns.
#[derive(Debug, Clone)]
pub struct JustifyLines {
    modes: Vec<Justify>,
    separators: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl JustifyLines {
    /// One column per mode, separated by a single space.
    pub fn new(modes: Vec<Justify>) -> Self {
        let columns = modes.len();
        Self {
            separators: vec![" ".to_string(); columns.saturating_sub(1)],
            widths: vec![0; columns],
            rows: Vec::new(),
            modes,
        }
    }

    /// Use the same separator between every pair of columns
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.separators = vec![separator; self.modes.len().saturating_sub(1)];
        self
    }

    /// One separator per column boundary
    pub fn with_separators<I, S>(mut self, separators: I) -> Result<Self, JustifyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let separators: Vec<String> = separators.into_iter().map(Into::into).collect();
        let expected = self.modes.len().saturating_sub(1);
        if separators.len() != expected {
            return Err(JustifyError::SeparatorCount {
                columns: self.modes.len(),
                expected,
                got: separators.len(),
            });
        }
        self.separators = separators;
        Ok(self)
    }

    pub fn columns(&self) -> usize {
        self.modes.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current width of each column
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn push<I, S>(&mut self, row: I) -> Result<(), JustifyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.modes.len() {
            return Err(JustifyError::ColumnCount {
                expected: self.modes.len(),
                got: row.len(),
            });
        }
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
        Ok(())
    }

    /// Drop all rows and widths, keeping modes and separators.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.widths.iter_mut().for_each(|w| *w = 0);
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| self.format_row(row)).collect()
    }

    fn format_row(&self, row: &[String]) -> String {
        let last = row.len().saturating_sub(1);
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            let (before, after) = self.modes[i].padding(cell.chars().count(), self.widths[i]);
            line.extend(std::iter::repeat_n(' ', before));
            line.push_str(cell);
            if i < last {
                line.extend(std::iter::repeat_n(' ', after));
                line.push_str(&self.separators[i]);
            }
        }
        line
    }
}
