//! Error types for the cutflow crate.
//!
//! Every failure here is a configuration error surfaced at the point of the
//! offending merge call: nothing is retried internally, and evaluating an
//! event or a collection through a pipeline can never fail on its own.

use thiserror::Error;

/// Errors that can occur when combining cut statistics across chunks.
///
/// Mixing stage kinds inside a pipeline and forgetting to implement a
/// selection method are compile errors in this crate (the containers are
/// generic and the trait methods have no defaults), so only merge-time
/// misalignments are left to report at runtime.
#[derive(Error, Debug)]
pub enum CutflowError {
    /// Two stages with different identities were combined
    #[error("Cannot combine stage '{left}' with stage '{right}': names differ")]
    NameMismatch { left: String, right: String },

    /// Two stages with the same name carry different detail counters
    #[error("Detail counters of stage '{name}' do not line up: {left:?} vs {right:?}")]
    DetailKeyMismatch {
        name: String,
        left: Vec<String>,
        right: Vec<String>,
    },

    /// Two reports with different stage counts were merged
    #[error("Cannot merge reports with {left} and {right} stages")]
    LengthMismatch { left: usize, right: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CutflowError>;
