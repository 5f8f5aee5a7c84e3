use thiserror::Error;

/// Failure of a ranking run. Every variant aborts the whole run.
///
/// Row and column indices are 0-based: `row` indexes candidates in input
/// order, `column` indexes criteria (the identifier field is not counted).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("row {row}, column {column} ({field}): cannot parse {value:?} as a number")]
    Parse {
        row: usize,
        column: usize,
        field: String,
        value: String,
    },

    #[error("row {row}, column {column} ({field}): negative value {value} is not supported")]
    NegativeValue {
        row: usize,
        column: usize,
        field: String,
        value: f64,
    },

    #[error("invalid shape: {0}")]
    Shape(String),

    #[error(
        "criterion column {column}{} has maximum {max}; cannot normalize",
        criterion_suffix(.criterion)
    )]
    DegenerateColumn {
        column: usize,
        criterion: Option<String>,
        max: f64,
    },

    #[error("entropy weighting needs at least 2 candidates, got {candidates}")]
    InsufficientData { candidates: usize },

    #[error("degenerate entropy weights: {0}")]
    DegenerateWeights(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RankError {
    /// Attaches the criterion name to column-scoped errors that were raised
    /// by stages working on bare matrices.
    pub fn with_criterion_names(self, criteria: &[String]) -> Self {
        match self {
            RankError::DegenerateColumn {
                column,
                criterion: None,
                max,
            } => RankError::DegenerateColumn {
                column,
                criterion: criteria.get(column).cloned(),
                max,
            },
            other => other,
        }
    }
}

fn criterion_suffix(criterion: &Option<String>) -> String {
    match criterion {
        Some(name) => format!(" ({name})"),
        None => String::new(),
    }
}
