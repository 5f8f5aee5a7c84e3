use serde::Serialize;

/// Criterion weights; non-negative and summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// One composite score per candidate, in input order.
pub type ScoreVector = Vec<f64>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    /// 0-based row of the candidate in the input table.
    pub index: usize,
    pub name: String,
    pub score: f64,
}
