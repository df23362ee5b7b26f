//! Catalog error types.

use thiserror::Error;

/// Errors produced by the ingestion pipeline.
///
/// The query engine is a total function over well-formed input and has no
/// error type of its own; everything that can go wrong happens at the
/// ingestion boundary, and a failed batch never touches the store.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document is not valid JSON.
    #[error("invalid catalog document: {0}")]
    Format(#[from] serde_json::Error),

    /// The document decoded, but not to an array of products.
    #[error("catalog document must be an array of products")]
    NotAnArray,

    /// A product element is missing a required field or carries an
    /// unusable value for it. The whole batch is rejected.
    #[error("product at index {index} is missing required field `{field}`")]
    Validation {
        /// Zero-based position of the first offending element.
        index: usize,
        /// Name of the field that failed the check.
        field: &'static str,
    },
}
