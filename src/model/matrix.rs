use serde::{Serialize, Serializer};

use crate::error::RankError;

/// Dense row-major `n_rows × n_cols` matrix of `f64`.
///
/// Rows are candidates, columns are criteria. Both dimensions are at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

/// Raw candidate × criterion values.
pub type DecisionMatrix = Matrix;

/// Column-max normalized values.
pub type NormalizedMatrix = Matrix;

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RankError> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(RankError::Shape("matrix has no rows".to_string()));
        }
        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(RankError::Shape("matrix has no columns".to_string()));
        }
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(RankError::Shape(format!(
                    "matrix row {} has {} values, expected {}",
                    idx,
                    row.len(),
                    n_cols
                )));
            }
            values.extend(row);
        }
        Ok(Self {
            n_rows,
            n_cols,
            values,
        })
    }

    pub(crate) fn from_raw(n_rows: usize, n_cols: usize, values: Vec<f64>) -> Self {
        debug_assert!(n_rows > 0 && n_cols > 0);
        debug_assert_eq!(values.len(), n_rows * n_cols);
        Self {
            n_rows,
            n_cols,
            values,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.n_cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.n_cols;
        &self.values[start..start + self.n_cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.n_cols)
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(col).step_by(self.n_cols).copied()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
