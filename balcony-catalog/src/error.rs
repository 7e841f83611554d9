//! Error types raised while assembling a plant catalog.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An entry had an empty or whitespace-only identifier.
    #[error("catalog entry {index} has an empty id")]
    EmptyId {
        /// Position of the entry in the catalog.
        index: usize,
    },
    /// Two entries shared an identifier.
    #[error("catalog id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A numeric field was NaN or infinite.
    #[error("{field} of {id} must be a finite number")]
    NonFinite {
        /// Identifier of the affected entry.
        id: String,
        /// Name of the offending field.
        field: &'static str,
    },
    /// The minimum floor area was zero or negative.
    #[error("minimum area of {id} must be greater than zero")]
    NonPositiveArea {
        /// Identifier of the affected entry.
        id: String,
    },
    /// A `min`/`max` pair was inverted or left its domain.
    #[error("{field} range of {id} is inverted or out of bounds")]
    InvalidRange {
        /// Identifier of the affected entry.
        id: String,
        /// Name of the offending range.
        field: &'static str,
    },
    /// The catalog JSON could not be decoded.
    #[error("failed to parse catalog JSON")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
