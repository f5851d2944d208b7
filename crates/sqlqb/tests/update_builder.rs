//! End-to-end tests for the UPDATE builder surface.

use sqlqb::{
    Expr, IdentifierResolver, QbError, QbResult, SqlStatement, UpdateBuilder, update, update_with,
};

#[test]
fn full_scenario() {
    let mut qb = update("T").unwrap();
    qb.set("x", "1")
        .unwrap()
        .set("y", "2")
        .unwrap()
        .and_where("id = 5")
        .unwrap();
    assert_eq!(qb.build().unwrap(), "UPDATE T SET x = 1, y = 2 WHERE id = 5");
}

#[test]
fn single_chain_expression() {
    let sql = update("accounts")
        .unwrap()
        .set("balance", "balance + $1")
        .unwrap()
        .and_where("id = $2")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE accounts SET balance = balance + $1 WHERE id = $2");
}

#[test]
fn reassignment_keeps_position_takes_latest_value() {
    let mut qb = update("t").unwrap();
    qb.set("a", "1").unwrap().set("b", "2").unwrap().set("a", "3").unwrap();
    assert_eq!(qb.build().unwrap(), "UPDATE t SET a = 3, b = 2");
}

#[test]
fn render_without_table_fails() {
    let mut qb = UpdateBuilder::new();
    qb.set("x", "1").unwrap();
    assert_eq!(qb.build(), Err(QbError::MissingTable));
}

#[test]
fn render_without_assignments_fails() {
    let mut qb = UpdateBuilder::new();
    qb.table("t").unwrap();
    assert_eq!(qb.build(), Err(QbError::NoAssignments));
    assert!(qb.build().unwrap_err().is_invalid_query());
}

#[test]
fn predicate_calls_conjoin() {
    let mut qb = update("t").unwrap();
    qb.set("x", "1").unwrap();
    qb.and_where("id=5").unwrap().and_where("active=1").unwrap();
    assert_eq!(
        qb.build().unwrap(),
        "UPDATE t SET x = 1 WHERE id=5 AND active=1"
    );
}

#[test]
fn mixed_group_and_leaf_arguments_flatten() {
    let mut qb = update("t").unwrap();
    qb.set("x", "1").unwrap();
    qb.and_where_all([Expr::from(["a", "b"]), Expr::from("c")]).unwrap();
    assert_eq!(qb.build().unwrap(), "UPDATE t SET x = 1 WHERE a AND b AND c");
}

#[test]
fn deeply_nested_groups_flatten_left_to_right() {
    let mut qb = update("t").unwrap();
    qb.set("x", "1").unwrap();
    qb.and_where(Expr::group([
        Expr::group([Expr::raw("a"), Expr::group(["b"])]),
        Expr::raw("c"),
    ]))
    .unwrap();
    assert_eq!(qb.build().unwrap(), "UPDATE t SET x = 1 WHERE a AND b AND c");
}

#[test]
fn failed_predicate_call_does_not_corrupt_later_output() {
    let mut qb = update("t").unwrap();
    qb.set("x", "1").unwrap();
    let err = qb.and_where_all(Vec::<Expr>::new()).unwrap_err();
    assert_eq!(err, QbError::EmptyPredicate);
    qb.and_where("id = 5").unwrap();
    assert_eq!(qb.build().unwrap(), "UPDATE t SET x = 1 WHERE id = 5");
}

#[test]
fn render_is_idempotent() {
    let mut qb = update("t").unwrap();
    qb.set("x", "1").unwrap().and_where("id = 5").unwrap();
    assert_eq!(qb.build().unwrap(), qb.build().unwrap());
}

#[test]
fn trait_object_style_rendering() {
    let mut qb = update("t").unwrap();
    qb.set("x", "1").unwrap();
    let stmt: &dyn SqlStatement = &qb;
    assert_eq!(stmt.to_sql().unwrap(), "UPDATE t SET x = 1");
}

/// A resolver that quotes every reference verbatim, for dialects where the
/// caller guarantees names are already exact.
struct AlwaysQuote;

impl IdentifierResolver for AlwaysQuote {
    fn resolve(&self, raw: &str) -> QbResult<String> {
        if raw.is_empty() {
            return Err(QbError::validation("Identifier cannot be empty"));
        }
        Ok(format!("\"{raw}\""))
    }
}

#[test]
fn custom_resolver_plugs_in() {
    let mut qb = update_with(AlwaysQuote, "users").unwrap();
    qb.set("name", "$1").unwrap();
    assert_eq!(qb.build().unwrap(), r#"UPDATE "users" SET "name" = $1"#);
}

#[test]
fn custom_resolver_errors_propagate() {
    assert!(update_with(AlwaysQuote, "").is_err());
}

#[test]
fn malformed_table_rejected_at_mutation_time() {
    let err = update("not a table").unwrap_err();
    assert!(err.is_validation());
}
