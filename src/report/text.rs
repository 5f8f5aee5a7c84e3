use crate::pipeline::RankingOutcome;
use crate::report::{ReportOptions, format_fixed};

pub fn render_ranking_text(outcome: &RankingOutcome, opts: &ReportOptions) -> String {
    let trace = &outcome.trace;
    let p = opts.precision;
    let mut out = String::new();

    out.push_str("Entropy-WASPAS Ranking\n");
    out.push_str("======================\n\n");
    out.push_str(&format!("Candidates: {}\n", trace.candidates.len()));
    out.push_str(&format!(
        "Criteria: {} ({})\n",
        trace.criteria.len(),
        trace.criteria.join(", ")
    ));
    out.push_str(&format!("Lambda: {}\n\n", trace.lambda));

    let rows: Vec<Vec<String>> = outcome
        .ranking
        .iter()
        .map(|e| {
            vec![
                e.name.clone(),
                format_fixed(e.score, p),
                e.rank.to_string(),
            ]
        })
        .collect();
    push_table(&mut out, &["Name", "Score", "Rank"], &rows);

    if opts.include_trace {
        out.push_str("\nNormalized matrix\n");
        let mut header = vec!["Name"];
        header.extend(trace.criteria.iter().map(String::as_str));
        let rows: Vec<Vec<String>> = trace
            .normalized
            .rows()
            .zip(&trace.candidates)
            .map(|(row, name)| {
                let mut cells = vec![name.clone()];
                cells.extend(row.iter().map(|&v| format_fixed(v, p)));
                cells
            })
            .collect();
        push_table(&mut out, &header, &rows);

        out.push_str("\nEntropy weights\n");
        for (j, name) in trace.criteria.iter().enumerate() {
            out.push_str(&format!(
                "K{} ({}): weight={} entropy={} diversification={}\n",
                j + 1,
                name,
                format_fixed(trace.weights.as_slice()[j], p),
                format_fixed(trace.entropies[j], p),
                format_fixed(trace.diversification[j], p)
            ));
        }
    }

    out
}

/// Left-aligned first column, right-aligned remaining columns.
fn push_table(out: &mut String, header: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    push_row(out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(out, &rule, &widths);
    for row in rows {
        push_row(out, row, &widths);
    }
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = widths[i].saturating_sub(cell.chars().count());
        if i == 0 {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        } else {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
