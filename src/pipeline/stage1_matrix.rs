use crate::error::RankError;
use crate::model::{DecisionMatrix, Matrix, ParsedTable};

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub candidates: Vec<String>,
    pub criteria: Vec<String>,
    pub matrix: DecisionMatrix,
}

pub fn run_stage1(table: &ParsedTable) -> Result<Stage1Output, RankError> {
    let n_rows = table.n_rows();
    let n_cols = table.n_criteria();
    if n_rows == 0 {
        return Err(RankError::Shape("table has no candidate rows".to_string()));
    }
    if n_cols == 0 {
        return Err(RankError::Shape(format!(
            "table has no criterion columns besides {:?}",
            table.identifier_field()
        )));
    }

    let criteria = table.criteria().to_vec();
    let mut candidates = Vec::with_capacity(n_rows);
    let mut values = Vec::with_capacity(n_rows * n_cols);

    for (row, cells) in table.rows().iter().enumerate() {
        candidates.push(cells[0].clone());
        for (column, raw) in cells[1..].iter().enumerate() {
            values.push(parse_cell(raw, row, column, &criteria[column])?);
        }
    }

    tracing::debug!(rows = n_rows, criteria = n_cols, "decision matrix built");

    Ok(Stage1Output {
        candidates,
        criteria,
        matrix: Matrix::from_raw(n_rows, n_cols, values),
    })
}

fn parse_cell(raw: &str, row: usize, column: usize, field: &str) -> Result<f64, RankError> {
    let trimmed = raw.trim();
    let parse_error = || RankError::Parse {
        row,
        column,
        field: field.to_string(),
        value: raw.to_string(),
    };
    // `f64::from_str` accepts "NaN" and "inf"; neither is a usable criterion value.
    let value: f64 = trimmed.parse().map_err(|_| parse_error())?;
    if !value.is_finite() {
        return Err(parse_error());
    }
    if value < 0.0 {
        return Err(RankError::NegativeValue {
            row,
            column,
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_matrix.rs"]
mod tests;
