//! Error types for sqlqb

use thiserror::Error;

/// Result type alias for builder operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for statement construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QbError {
    /// WHERE invoked with zero expressions after flattening
    #[error("Validation error: WHERE requires at least one expression")]
    EmptyPredicate,

    /// Render invoked before a target table was set
    #[error("Invalid query: no target table set")]
    MissingTable,

    /// Render invoked before any SET assignment was made
    #[error("Invalid query: SET clause cannot be empty")]
    NoAssignments,

    /// Identifier rejected by the resolver
    #[error("Validation error: {0}")]
    Validation(String),
}

impl QbError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a mutator-side validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyPredicate | Self::Validation(_))
    }

    /// Check if this is a render-time invalid-query condition
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, Self::MissingTable | Self::NoAssignments)
    }
}
