pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::pipeline::RankingOutcome;
use json::render_ranking_json;
use text::render_ranking_text;

pub const DEFAULT_PRECISION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Both,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Decimal places for scores and matrix values in the text report.
    pub precision: usize,
    pub include_trace: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            include_trace: false,
        }
    }
}

pub fn format_fixed(v: f64, precision: usize) -> String {
    format!("{:.*}", precision, v)
}

/// Renders the requested reports into one string, text first.
pub fn render_reports(
    outcome: &RankingOutcome,
    format: ReportFormat,
    opts: &ReportOptions,
) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        out.push_str(&render_ranking_text(outcome, opts));
    }
    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_ranking_json(outcome, opts)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes `ranking.txt` and/or `ranking.json` into `out_dir` and returns the
/// paths written.
pub fn write_reports(
    outcome: &RankingOutcome,
    out_dir: &Path,
    format: ReportFormat,
    opts: &ReportOptions,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        let path = out_dir.join("ranking.txt");
        write_text(&path, &render_ranking_text(outcome, opts))?;
        written.push(path);
    }
    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        let path = out_dir.join("ranking.json");
        let mut json = render_ranking_json(outcome, opts)?;
        json.push('\n');
        write_text(&path, &json)?;
        written.push(path);
    }

    for path in &written {
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
