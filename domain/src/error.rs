//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown action kind: {0}")]
    UnknownActionKind(String),

    #[error("Unknown insert position: {0}")]
    UnknownInsertPosition(String),

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Unknown context category: {0}")]
    UnknownCategory(String),
}
