//! UPDATE statement builder.

use crate::error::{QbError, QbResult};
use crate::expr::Expr;
use crate::ident::{IdentifierResolver, Sql92Resolver};
use crate::traits::SqlStatement;

/// Fluent UPDATE statement builder.
///
/// State accumulates through the chain and is validated when the statement
/// is rendered:
///
/// ```
/// let mut qb = sqlqb::update("users")?;
/// qb.set("status", "'inactive'")?
///     .set("updated_at", "NOW()")?
///     .and_where("id = $1")?;
///
/// assert_eq!(
///     qb.build()?,
///     "UPDATE users SET status = 'inactive', updated_at = NOW() WHERE id = $1"
/// );
/// # Ok::<(), sqlqb::QbError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UpdateBuilder<R = Sql92Resolver> {
    /// Identifier resolution capability.
    resolver: R,
    /// Resolved target table (last `table()` call wins).
    table: Option<String>,
    /// SET assignments in first-assignment order.
    assignments: Vec<(String, String)>,
    /// AND-joined conjunction across all successful WHERE calls.
    predicate: Option<String>,
}

impl UpdateBuilder<Sql92Resolver> {
    /// Create an empty builder with the default SQL92 resolver.
    pub fn new() -> Self {
        Self::with_resolver(Sql92Resolver)
    }
}

impl Default for UpdateBuilder<Sql92Resolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: IdentifierResolver> UpdateBuilder<R> {
    /// Create an empty builder using a custom identifier resolver.
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            table: None,
            assignments: Vec::new(),
            predicate: None,
        }
    }

    /// Set the target table, replacing any prior value.
    pub fn table(&mut self, raw: &str) -> QbResult<&mut Self> {
        self.table = Some(self.resolver.resolve(raw)?);
        Ok(self)
    }

    /// Assign an expression to a column.
    ///
    /// The first assignment to a column fixes its position in the SET
    /// clause; later assignments overwrite the value in place.
    pub fn set(&mut self, column: &str, expr: &str) -> QbResult<&mut Self> {
        let column = self.resolver.resolve(column)?;
        match self.assignments.iter_mut().find(|(col, _)| *col == column) {
            Some(slot) => slot.1 = expr.to_string(),
            None => self.assignments.push((column, expr.to_string())),
        }
        Ok(self)
    }

    /// Assign an optional expression (None => skip).
    pub fn set_opt(&mut self, column: &str, expr: Option<&str>) -> QbResult<&mut Self> {
        if let Some(e) = expr {
            self.set(column, e)?;
        }
        Ok(self)
    }

    /// Add one expression (or nested group) to the WHERE conjunction.
    pub fn and_where(&mut self, expr: impl Into<Expr>) -> QbResult<&mut Self> {
        self.and_where_all([expr.into()])
    }

    /// Add several expressions and/or nested groups in one call.
    ///
    /// Arguments are flattened depth-first, left-to-right, joined with
    /// ` AND `, and appended to any previously accumulated predicate. Fails
    /// with [`QbError::EmptyPredicate`] before touching any state if the
    /// call supplies no expressions at all, so a failed call leaves the
    /// accumulated predicate usable.
    pub fn and_where_all<I>(&mut self, parts: I) -> QbResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        let mut leaves = Vec::new();
        for part in parts {
            part.into().flatten_into(&mut leaves);
        }
        if leaves.is_empty() {
            return Err(QbError::EmptyPredicate);
        }

        let joined = leaves.join(" AND ");
        match self.predicate.as_mut() {
            Some(acc) => {
                acc.push_str(" AND ");
                acc.push_str(&joined);
            }
            None => self.predicate = Some(joined),
        }
        Ok(self)
    }

    /// Validate accumulated state and render the statement text.
    ///
    /// Fails with [`QbError::MissingTable`] if no target table is set, then
    /// [`QbError::NoAssignments`] if the SET clause would be empty.
    /// Rendering does not mutate the builder; repeated calls on unchanged
    /// state return identical text.
    pub fn build(&self) -> QbResult<String> {
        let table = self.table.as_deref().ok_or(QbError::MissingTable)?;
        if self.assignments.is_empty() {
            return Err(QbError::NoAssignments);
        }

        let set_parts: Vec<String> = self
            .assignments
            .iter()
            .map(|(col, expr)| format!("{col} = {expr}"))
            .collect();

        let mut sql = format!("UPDATE {} SET {}", table, set_parts.join(", "));
        if let Some(predicate) = &self.predicate {
            sql.push_str(" WHERE ");
            sql.push_str(predicate);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %sql, "built UPDATE statement");

        Ok(sql)
    }
}

impl<R: IdentifierResolver> SqlStatement for UpdateBuilder<R> {
    fn to_sql(&self) -> QbResult<String> {
        self.build()
    }
}
