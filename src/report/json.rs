use serde::Serialize;

use crate::model::RankingEntry;
use crate::pipeline::{PipelineTrace, RankingOutcome};
use crate::report::ReportOptions;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    lambda: f64,
    criteria: &'a [String],
    ranking: &'a [RankingEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a PipelineTrace>,
}

/// Scores are emitted at full precision; `opts.precision` only affects the
/// text report.
pub fn render_ranking_json(
    outcome: &RankingOutcome,
    opts: &ReportOptions,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        lambda: outcome.trace.lambda,
        criteria: &outcome.trace.criteria,
        ranking: &outcome.ranking,
        trace: opts.include_trace.then_some(&outcome.trace),
    };
    serde_json::to_string_pretty(&report)
}
