//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using FlowError.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors that can occur while driving a practice flow.
///
/// Everything else in this crate is a total function over well-formed
/// inputs; these two cases are the only caller mistakes worth surfacing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("practice sequence must contain at least one card")]
    EmptySequence,

    #[error("practice flow already finished")]
    AlreadyFinished,
}
