//! Trait definitions for statement builders.

use crate::error::QbResult;

/// Terminal rendering shared by the statement-builder family.
///
/// A builder implements this once its statement kind can be validated and
/// rendered to text; callers that only need the final SQL can take any
/// `impl SqlStatement`.
pub trait SqlStatement {
    /// Validate accumulated state and render the final statement text.
    fn to_sql(&self) -> QbResult<String>;
}
