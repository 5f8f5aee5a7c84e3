use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::model::ParsedTable;
use crate::pipeline::rank;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("entropy_waspas_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn outcome() -> RankingOutcome {
    let table = ParsedTable::from_strs(
        &["name", "attendance", "sales"],
        &[&["A", "10", "5"], &["B", "8", "9"], &["C", "6", "7"]],
    )
    .unwrap();
    rank(&table).unwrap()
}

#[test]
fn test_format_fixed() {
    assert_eq!(format_fixed(0.894110385, 4), "0.8941");
    assert_eq!(format_fixed(1.0, 2), "1.00");
}

#[test]
fn test_text_ranking_table() {
    let text = render_ranking_text(&outcome(), &ReportOptions::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Entropy-WASPAS Ranking");
    assert!(text.contains("Criteria: 2 (attendance, sales)\n"));
    assert!(text.contains("Lambda: 0.5\n"));

    let header = lines.iter().position(|l| l.starts_with("Name")).unwrap();
    assert_eq!(lines[header], "Name   Score  Rank");
    assert_eq!(lines[header + 2], "B     0.8941     1");
    assert_eq!(lines[header + 3], "A     0.7684     2");
    assert_eq!(lines[header + 4], "C     0.6833     3");
    assert!(!text.contains("Normalized matrix"));
}

#[test]
fn test_text_trace_section() {
    let opts = ReportOptions {
        precision: 3,
        include_trace: true,
    };
    let text = render_ranking_text(&outcome(), &opts);
    assert!(text.contains("Normalized matrix\n"));
    assert!(text.contains("A          1.000  0.556\n"));
    assert!(text.contains("K1 (attendance): weight=0.516"));
    assert!(text.contains("K2 (sales): weight=0.484"));
}

#[test]
fn test_json_report_shape() {
    let json = render_ranking_json(&outcome(), &ReportOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], "entropy-waspas");
    assert_eq!(value["lambda"], 0.5);
    assert_eq!(value["ranking"][0]["name"], "B");
    assert_eq!(value["ranking"][0]["rank"], 1);
    assert_eq!(value["ranking"][0]["index"], 1);
    assert!(value.get("trace").is_none());
}

#[test]
fn test_json_report_with_trace() {
    let opts = ReportOptions {
        include_trace: true,
        ..ReportOptions::default()
    };
    let json = render_ranking_json(&outcome(), &opts).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["trace"]["matrix"][1][1], 9.0);
    assert_eq!(value["trace"]["normalized"][0][0], 1.0);
    assert_eq!(value["trace"]["weights"].as_array().unwrap().len(), 2);
    assert_eq!(value["trace"]["criteria"][0], "attendance");
}

#[test]
fn test_render_both_formats() {
    let out = render_reports(&outcome(), ReportFormat::Both, &ReportOptions::default()).unwrap();
    assert!(out.starts_with("Entropy-WASPAS Ranking"));
    assert!(out.contains("\"ranking\""));
}

#[test]
fn test_write_reports_files() {
    let dir = make_temp_dir();
    let written = write_reports(
        &outcome(),
        &dir,
        ReportFormat::Both,
        &ReportOptions::default(),
    )
    .unwrap();
    assert_eq!(written, vec![dir.join("ranking.txt"), dir.join("ranking.json")]);
    let text = std::fs::read_to_string(dir.join("ranking.txt")).unwrap();
    assert!(text.contains("B     0.8941     1"));
    let json = std::fs::read_to_string(dir.join("ranking.json")).unwrap();
    assert!(json.ends_with("}\n"));
}

#[test]
fn test_write_reports_json_only() {
    let dir = make_temp_dir();
    let written = write_reports(
        &outcome(),
        &dir,
        ReportFormat::Json,
        &ReportOptions::default(),
    )
    .unwrap();
    assert_eq!(written, vec![dir.join("ranking.json")]);
    assert!(!dir.join("ranking.txt").exists());
}
