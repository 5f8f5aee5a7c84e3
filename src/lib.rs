//! Entropy-weighted WASPAS ranking of candidates against numeric criteria.
//!
//! The pipeline turns a [`ParsedTable`] into a decision matrix, normalizes
//! each criterion by its column maximum, derives objective weights from the
//! Shannon entropy of each column, scores every candidate with a blend of the
//! weighted sum and weighted product models, and sorts the result.
//!
//! ```no_run
//! use entropy_waspas::{ParsedTable, rank};
//!
//! let table = ParsedTable::from_strs(
//!     &["name", "attendance", "sales"],
//!     &[&["A", "10", "5"], &["B", "8", "9"], &["C", "6", "7"]],
//! )?;
//! let outcome = rank(&table)?;
//! assert_eq!(outcome.ranking[0].name, "B");
//! # Ok::<(), entropy_waspas::RankError>(())
//! ```

pub mod error;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::RankError;
pub use model::{
    DecisionMatrix, Matrix, NormalizedMatrix, ParsedTable, RankingEntry, ScoreVector,
    WeightVector,
};
pub use pipeline::stage4_waspas::{DEFAULT_LAMBDA, WaspasParams};
pub use pipeline::{PipelineTrace, RankingOutcome, rank, rank_with};
