pub mod matrix;
pub mod ranking;
pub mod table;

pub use matrix::{DecisionMatrix, Matrix, NormalizedMatrix};
pub use ranking::{RankingEntry, ScoreVector, WeightVector};
pub use table::ParsedTable;
