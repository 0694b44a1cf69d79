//! Error types for campus-paths-core.

use thiserror::Error;

/// Errors raised by graph queries, view construction and map lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// A query named a node the graph does not track as a key.
    #[error("node {0} is not in the graph")]
    UnknownNode(String),

    /// An edge label narrowed to a cost that is negative, NaN or infinite.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// A building short name that the naming table does not contain.
    #[error("unknown building: {0}")]
    UnknownBuilding(String),

    /// Malformed building or path record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error while opening a record file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_weight<N: std::fmt::Debug>(from: &N, to: &N, weight: f64) -> Self {
        Error::InvalidWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        }
    }
}
