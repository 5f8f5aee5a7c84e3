use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::error::RankError;
use crate::model::ParsedTable;

pub mod delimited;

use delimited::split_records;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input has no header row")]
    MissingHeader,

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    #[error("line {line}: unexpected text after closing quote")]
    TextAfterQuote { line: usize },

    #[error("line {line}: expected {expected} fields, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Table(#[from] RankError),
}

pub const DEFAULT_DELIMITER: char = ',';

/// Reads a delimited table from disk. `.tsv` files (optionally `.gz`) are
/// split on tabs, everything else on commas.
pub fn load_table(path: &Path) -> Result<ParsedTable, InputError> {
    load_table_with(path, delimiter_for(path))
}

pub fn load_table_with(path: &Path, delimiter: char) -> Result<ParsedTable, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "loaded input table");
    parse_table(&text, delimiter)
}

/// Builds a table from delimited text: the first record is the header and
/// supplies field names, blank lines are skipped, and every data row must have
/// exactly as many fields as the header.
pub fn parse_table(text: &str, delimiter: char) -> Result<ParsedTable, InputError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text, delimiter)?.into_iter();

    let header = records.next().ok_or(InputError::MissingHeader)?;
    let fields: Vec<String> = header
        .fields
        .iter()
        .map(|s| s.trim().to_string())
        .collect();

    let mut seen = HashSet::new();
    for name in &fields {
        if !seen.insert(name.as_str()) {
            tracing::warn!(field = %name, "duplicate field name in header");
        }
    }

    let mut rows = Vec::new();
    for record in records {
        if record.fields.len() != fields.len() {
            return Err(InputError::Ragged {
                line: record.line,
                expected: fields.len(),
                found: record.fields.len(),
            });
        }
        rows.push(record.fields);
    }

    tracing::debug!(fields = fields.len(), rows = rows.len(), "parsed input table");
    Ok(ParsedTable::new(fields, rows)?)
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn delimiter_for(path: &Path) -> char {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".tsv") || name.ends_with(".tab") {
        '\t'
    } else {
        DEFAULT_DELIMITER
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
