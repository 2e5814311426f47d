use thiserror::Error;

/// Failure to read a single field or row out of a fetched page.
///
/// Extractors return this per field so a caller can tell an absent element
/// from a malformed one; list extractors log it and skip the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("element not found: {0}")]
    Missing(String),

    #[error("row has {len} cells, needed index {index}")]
    MissingCell { index: usize, len: usize },

    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}
