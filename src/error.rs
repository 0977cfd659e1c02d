use thiserror::Error;

/// Alias used by the crate's fallible entry points.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Errors reported by the selection functions and the benchmark harness.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cannot select from an empty sequence")]
    EmptyInput,
    #[error("rank {rank} is out of bounds for a sequence of length {len}")]
    RankOutOfBounds { rank: usize, len: usize },
}

impl SelectionError {
    pub fn rank_out_of_bounds(rank: usize, len: usize) -> Self {
        SelectionError::RankOutOfBounds { rank, len }
    }
}

/// Errors reported by the bounds-checked container wrappers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("index {index} is out of bounds for a collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl StructureError {
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        StructureError::IndexOutOfBounds { index, len }
    }
}
