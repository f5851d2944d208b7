//! Expression grouping for WHERE clauses.
//!
//! The predicate mutators accept either single condition fragments or
//! nested sequences of them, at arbitrary depth. [`Expr`] models that shape
//! as a small tree which flattens, depth-first and left-to-right, into the
//! ordered list of fragments that get AND-joined.

/// A WHERE expression: one opaque condition fragment, or a nested group.
#[derive(Clone, Debug)]
pub enum Expr {
    /// A single condition fragment, passed through verbatim.
    Raw(String),
    /// A nested group of expressions, flattened in order.
    Group(Vec<Expr>),
}

impl Expr {
    /// Create a raw condition fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }

    /// Create a group from a sequence of expressions.
    ///
    /// # Example
    /// ```
    /// use sqlqb::Expr;
    ///
    /// let group = Expr::group(["a = 1", "b = 2"]);
    /// assert!(!group.is_empty());
    /// ```
    pub fn group<I>(exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::Group(exprs.into_iter().map(Into::into).collect())
    }

    /// Check if this expression contains no fragments.
    pub fn is_empty(&self) -> bool {
        match self {
            Expr::Raw(_) => false,
            Expr::Group(exprs) => exprs.iter().all(Expr::is_empty),
        }
    }

    /// Flatten into `out`, depth-first, left-to-right.
    pub(crate) fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            Expr::Raw(sql) => out.push(sql),
            Expr::Group(exprs) => {
                for expr in exprs {
                    expr.flatten_into(out);
                }
            }
        }
    }
}

impl From<&str> for Expr {
    fn from(sql: &str) -> Self {
        Expr::Raw(sql.to_string())
    }
}

impl From<String> for Expr {
    fn from(sql: String) -> Self {
        Expr::Raw(sql)
    }
}

impl<E: Into<Expr>> From<Vec<E>> for Expr {
    fn from(exprs: Vec<E>) -> Self {
        Expr::group(exprs)
    }
}

impl<E: Into<Expr>, const N: usize> From<[E; N]> for Expr {
    fn from(exprs: [E; N]) -> Self {
        Expr::group(exprs)
    }
}
