use thiserror::Error;

use crate::cell::CellIndex;

/// Errors raised before any search work is done. Running out of frontier or being cancelled are
/// not errors, see [SearchOutcome](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("a grid of {rows} rows needs at least one pixel per row, got a width of {width}")]
    InvalidDimensions { rows: usize, width: usize },
    #[error("search needs both a start and an end cell")]
    MissingEndpoint,
    #[error("start and end are the same cell ({row}, {col})")]
    SameEndpoints { row: usize, col: usize },
    #[error("cell index {index} lies outside a grid of {len} cells")]
    OutOfBounds { index: CellIndex, len: usize },
    #[error("unknown heuristic `{0}`")]
    UnknownHeuristic(String),
    #[error("invalid scene at line {line}: {reason}")]
    InvalidScene { line: usize, reason: String },
}

impl Error {
    /// Whether this error rejects the inputs of a search invocation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::MissingEndpoint | Error::SameEndpoints { .. } | Error::OutOfBounds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
