use crate::error::RankError;
use crate::model::{NormalizedMatrix, WeightVector};

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub weights: WeightVector,
    /// Per-criterion entropy `e_j`.
    pub entropies: Vec<f64>,
    /// Per-criterion degree of diversification `d_j = 1 - e_j`.
    pub diversification: Vec<f64>,
}

/// Shannon-entropy objective weights.
///
/// Normalized values are used directly as `p_ij`; columns are not rescaled to
/// sum to one first. With `k = 1 / ln(n)`:
///
/// ```text
/// e_j = -k * Σ_i p_ij ln p_ij     (0 ln 0 = 0)
/// d_j = 1 - e_j
/// w_j = d_j / Σ_k d_k
/// ```
pub fn run_stage3(normalized: &NormalizedMatrix) -> Result<Stage3Output, RankError> {
    let n = normalized.n_rows();
    if n < 2 {
        return Err(RankError::InsufficientData { candidates: n });
    }
    let k = 1.0 / (n as f64).ln();

    let mut entropies = Vec::with_capacity(normalized.n_cols());
    for col in 0..normalized.n_cols() {
        let sum: f64 = normalized.column(col).map(p_ln_p).sum();
        entropies.push(-k * sum);
    }
    let diversification: Vec<f64> = entropies.iter().map(|e| 1.0 - e).collect();

    let total: f64 = diversification.iter().sum();
    if total == 0.0 {
        return Err(RankError::DegenerateWeights(
            "diversification degrees sum to zero".to_string(),
        ));
    }
    if !total.is_finite() {
        return Err(RankError::DegenerateWeights(format!(
            "diversification degrees sum to {total}"
        )));
    }

    // When every e_j exceeds 1 all d_j are negative and the ratios are still
    // a valid weighting. Mixed signs surface as a negative weight below.
    let weights: Vec<f64> = diversification.iter().map(|d| d / total).collect();
    for (col, &w) in weights.iter().enumerate() {
        if !w.is_finite() || w < 0.0 {
            return Err(RankError::DegenerateWeights(format!(
                "criterion column {col} gets weight {w} (entropy {})",
                entropies[col]
            )));
        }
    }

    tracing::debug!(?entropies, ?weights, "entropy weights computed");

    Ok(Stage3Output {
        weights: WeightVector::new(weights),
        entropies,
        diversification,
    })
}

#[inline]
fn p_ln_p(p: f64) -> f64 {
    if p == 0.0 { 0.0 } else { p * p.ln() }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_entropy.rs"]
mod tests;
