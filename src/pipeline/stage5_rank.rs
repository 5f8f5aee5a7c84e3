use std::cmp::Ordering;

use crate::error::RankError;
use crate::model::RankingEntry;

/// Sorts candidates by descending score. Exact ties keep input order and
/// every entry gets its own 1-based position as rank.
pub fn run_stage5(candidates: &[String], scores: &[f64]) -> Result<Vec<RankingEntry>, RankError> {
    if candidates.len() != scores.len() {
        return Err(RankError::Shape(format!(
            "{} candidates for {} scores",
            candidates.len(),
            scores.len()
        )));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });

    Ok(order
        .into_iter()
        .enumerate()
        .map(|(pos, index)| RankingEntry {
            rank: pos + 1,
            index,
            name: candidates[index].clone(),
            score: scores[index],
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_rank.rs"]
mod tests;
