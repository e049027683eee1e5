//! Crate-wide error type and result alias.

use thiserror::Error;

/// Convenience alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the containers and the collaboration engine.
///
/// Missing keys and unreachable nodes are not errors: query surfaces report
/// them as `None` or empty collections. `EngineError` covers the cases that
/// are genuinely invalid to ask for, such as the head of an empty sequence.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Head or tail access on an empty sequence.
    #[error("{0} is empty")]
    EmptyAccess(&'static str),
    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
