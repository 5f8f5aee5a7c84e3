use crate::error::RankError;

/// Rectangular text table handed to the pipeline by the input collaborator.
///
/// `fields[0]` names the candidate identifier; every other field is a
/// criterion. Rows are positional against `fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    fields: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn new(fields: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, RankError> {
        if fields.is_empty() {
            return Err(RankError::Shape("table has no fields".to_string()));
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != fields.len() {
                return Err(RankError::Shape(format!(
                    "row {} has {} fields, expected {}",
                    idx,
                    row.len(),
                    fields.len()
                )));
            }
        }
        Ok(Self { fields, rows })
    }

    /// Convenience constructor for string literals.
    pub fn from_strs(fields: &[&str], rows: &[&[&str]]) -> Result<Self, RankError> {
        let fields = fields.iter().map(|s| s.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect();
        Self::new(fields, rows)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn identifier_field(&self) -> &str {
        &self.fields[0]
    }

    pub fn criteria(&self) -> &[String] {
        &self.fields[1..]
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.fields.len() - 1
    }
}
