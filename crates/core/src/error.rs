//! Error types for the extraction input boundary.
//!
//! The pipeline itself is pure and total: heuristic misses degrade to empty
//! or fallback values, never errors. Failures only exist where character
//! dumps cross into the typed page model.

use thiserror::Error;

/// Errors raised while reading an extraction collaborator's page dump.
#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("malformed page dump: {0}")]
    MalformedDump(#[from] serde_json::Error),

    #[error("page numbers are 1-based, found page 0")]
    PageNumberZero,
}

/// Convenience Result type alias for OutlineError.
pub type Result<T> = std::result::Result<T, OutlineError>;
