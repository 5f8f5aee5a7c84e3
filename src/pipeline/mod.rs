pub mod stage1_matrix;
pub mod stage2_normalize;
pub mod stage3_entropy;
pub mod stage4_waspas;
pub mod stage5_rank;

use serde::Serialize;

use crate::error::RankError;
use crate::model::{
    DecisionMatrix, NormalizedMatrix, ParsedTable, RankingEntry, ScoreVector, WeightVector,
};
use stage1_matrix::run_stage1;
use stage2_normalize::run_stage2;
use stage3_entropy::run_stage3;
use stage4_waspas::{WaspasParams, run_stage4};
use stage5_rank::run_stage5;

/// Intermediate artifacts of one run, kept for audit display.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineTrace {
    pub candidates: Vec<String>,
    pub criteria: Vec<String>,
    pub matrix: DecisionMatrix,
    pub normalized: NormalizedMatrix,
    pub entropies: Vec<f64>,
    pub diversification: Vec<f64>,
    pub weights: WeightVector,
    pub wsm: Vec<f64>,
    pub wpm: Vec<f64>,
    pub scores: ScoreVector,
    pub lambda: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingOutcome {
    pub ranking: Vec<RankingEntry>,
    pub trace: PipelineTrace,
}

/// Ranks the table with the default blend (`lambda = 0.5`).
pub fn rank(table: &ParsedTable) -> Result<RankingOutcome, RankError> {
    rank_with(table, &WaspasParams::default())
}

/// Runs matrix building, normalization, entropy weighting, WASPAS scoring and
/// ranking in sequence. The first failing stage aborts the run.
pub fn rank_with(table: &ParsedTable, params: &WaspasParams) -> Result<RankingOutcome, RankError> {
    params.validate()?;

    let stage1 = run_stage1(table)?;
    let normalized =
        run_stage2(&stage1.matrix).map_err(|e| e.with_criterion_names(&stage1.criteria))?;
    let stage3 = run_stage3(&normalized)?;
    let stage4 = run_stage4(&normalized, &stage3.weights, params)?;
    let ranking = run_stage5(&stage1.candidates, &stage4.scores)?;

    if let Some(top) = ranking.first() {
        tracing::info!(
            candidates = stage1.candidates.len(),
            criteria = stage1.criteria.len(),
            top = %top.name,
            top_score = top.score,
            "ranking complete"
        );
    }

    Ok(RankingOutcome {
        ranking,
        trace: PipelineTrace {
            candidates: stage1.candidates,
            criteria: stage1.criteria,
            matrix: stage1.matrix,
            normalized,
            entropies: stage3.entropies,
            diversification: stage3.diversification,
            weights: stage3.weights,
            wsm: stage4.wsm,
            wpm: stage4.wpm,
            scores: stage4.scores,
            lambda: params.lambda,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/orchestrator.rs"]
mod tests;
