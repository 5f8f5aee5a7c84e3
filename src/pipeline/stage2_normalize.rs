use crate::error::RankError;
use crate::model::{DecisionMatrix, Matrix, NormalizedMatrix};

/// Benefit-type linear normalization: each column divided by its maximum.
pub fn run_stage2(matrix: &DecisionMatrix) -> Result<NormalizedMatrix, RankError> {
    let maxima = column_maxima(matrix);
    for (column, &max) in maxima.iter().enumerate() {
        if max.is_nan() || max <= 0.0 {
            return Err(RankError::DegenerateColumn {
                column,
                criterion: None,
                max,
            });
        }
    }

    let n_cols = matrix.n_cols();
    let mut values = Vec::with_capacity(matrix.n_rows() * n_cols);
    for row in matrix.rows() {
        for (col, &v) in row.iter().enumerate() {
            values.push(v / maxima[col]);
        }
    }

    tracing::debug!(?maxima, "normalized decision matrix");

    Ok(Matrix::from_raw(matrix.n_rows(), n_cols, values))
}

pub fn column_maxima(matrix: &DecisionMatrix) -> Vec<f64> {
    (0..matrix.n_cols())
        .map(|col| matrix.column(col).fold(f64::NEG_INFINITY, f64::max))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
