//! # sqlqb
//!
//! A fluent builder for SQL UPDATE statements.
//!
//! ## Features
//!
//! - **Fluent chaining**: table → assignments → predicate → render
//! - **Safe identifiers**: table and column names pass through an
//!   [`IdentifierResolver`] before they reach the statement
//! - **Ordered SET clause**: columns render in first-assignment order;
//!   re-assignment overwrites the value in place
//! - **Composable WHERE**: expressions and nested groups flatten into one
//!   AND-joined conjunction
//! - **Validating render**: a statement without a table or assignments is
//!   an error, not bad SQL
//!
//! ## Usage
//!
//! ```
//! use sqlqb::update;
//!
//! let mut qb = update("users")?;
//! qb.set("status", "'inactive'")?
//!     .set("updated_at", "NOW()")?
//!     .and_where("id = $1")?;
//!
//! assert_eq!(
//!     qb.build()?,
//!     "UPDATE users SET status = 'inactive', updated_at = NOW() WHERE id = $1"
//! );
//! # Ok::<(), sqlqb::QbError>(())
//! ```
//!
//! The builder owns no connection: the rendered text is handed to whatever
//! statement-preparation layer the caller uses.

pub mod error;
pub mod expr;
pub mod ident;
pub mod traits;
pub mod update;

pub use error::{QbError, QbResult};
pub use expr::Expr;
pub use ident::{IdentifierResolver, Sql92Resolver};
pub use traits::SqlStatement;
pub use update::UpdateBuilder;

/// Create an UPDATE builder for the given table.
///
/// # Example
/// ```
/// let mut qb = sqlqb::update("users")?;
/// qb.set("active", "FALSE")?;
/// assert_eq!(qb.build()?, "UPDATE users SET active = FALSE");
/// # Ok::<(), sqlqb::QbError>(())
/// ```
pub fn update(table: &str) -> QbResult<UpdateBuilder> {
    let mut qb = UpdateBuilder::new();
    qb.table(table)?;
    Ok(qb)
}

/// Create an UPDATE builder with a custom identifier resolver.
pub fn update_with<R: IdentifierResolver>(resolver: R, table: &str) -> QbResult<UpdateBuilder<R>> {
    let mut qb = UpdateBuilder::with_resolver(resolver);
    qb.table(table)?;
    Ok(qb)
}
