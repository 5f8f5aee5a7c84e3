use serde::{Deserialize, Serialize};

use crate::error::RankError;
use crate::model::{NormalizedMatrix, ScoreVector, WeightVector};

pub const DEFAULT_LAMBDA: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaspasParams {
    /// Share of the weighted sum model in the blend; `1 - lambda` goes to
    /// the weighted product model.
    pub lambda: f64,
}

impl Default for WaspasParams {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
        }
    }
}

impl WaspasParams {
    pub fn new(lambda: f64) -> Result<Self, RankError> {
        let params = Self { lambda };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), RankError> {
        if !self.lambda.is_finite() || !(0.0..=1.0).contains(&self.lambda) {
            return Err(RankError::InvalidParameter(format!(
                "lambda must be within [0, 1], got {}",
                self.lambda
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Stage4Output {
    pub scores: ScoreVector,
    pub wsm: Vec<f64>,
    pub wpm: Vec<f64>,
}

pub fn run_stage4(
    normalized: &NormalizedMatrix,
    weights: &WeightVector,
    params: &WaspasParams,
) -> Result<Stage4Output, RankError> {
    params.validate()?;
    if weights.len() != normalized.n_cols() {
        return Err(RankError::Shape(format!(
            "{} weights for {} criteria",
            weights.len(),
            normalized.n_cols()
        )));
    }

    let w = weights.as_slice();
    let n_rows = normalized.n_rows();
    let mut scores = Vec::with_capacity(n_rows);
    let mut wsm = Vec::with_capacity(n_rows);
    let mut wpm = Vec::with_capacity(n_rows);

    for row in normalized.rows() {
        let sum = weighted_sum(row, w);
        let product = weighted_product(row, w);
        scores.push(params.lambda * sum + (1.0 - params.lambda) * product);
        wsm.push(sum);
        wpm.push(product);
    }

    tracing::debug!(rows = n_rows, lambda = params.lambda, "waspas scores computed");

    Ok(Stage4Output { scores, wsm, wpm })
}

pub fn weighted_sum(row: &[f64], weights: &[f64]) -> f64 {
    row.iter().zip(weights).map(|(v, w)| v * w).sum()
}

/// `Π v^w`; `powf` already yields `0^w = 0` for `w > 0` and `0^0 = 1`.
pub fn weighted_product(row: &[f64], weights: &[f64]) -> f64 {
    row.iter().zip(weights).map(|(v, w)| v.powf(*w)).product()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_waspas.rs"]
mod tests;
